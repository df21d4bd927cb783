//! Line commands understood by the console host

use credential_core::{FieldName, OAuthProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FieldName, String),
    Toggle(FieldName),
    Submit,
    Reset,
    ForgotPassword,
    OAuth(OAuthProvider),
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  email <value>        set the email
  password <value>     set the password
  confirm <value>      set the password confirmation (register only)
  show password        toggle password visibility
  show confirm         toggle confirmation visibility
  submit               validate and submit
  reset                clear the form
  forgot               request a password reset (sign-in only)
  oauth google         continue with a third-party provider
  status               print the form state
  help | quit";

impl Command {
    /// Values keep everything after the first space, including whitespace.
    pub fn parse(line: &str) -> Option<Self> {
        let (head, rest) = match line.split_once(' ') {
            Some((head, rest)) => (head, Some(rest)),
            None => (line.trim_end(), None),
        };

        let bare = rest.map_or(true, |r| r.trim().is_empty());
        let value = || rest.unwrap_or_default().to_string();

        match head {
            "email" => Some(Command::Set(FieldName::Email, value())),
            "password" => Some(Command::Set(FieldName::Password, value())),
            "confirm" => Some(Command::Set(FieldName::ConfirmPassword, value())),
            "show" => match rest.map(str::trim) {
                Some("password") => Some(Command::Toggle(FieldName::Password)),
                Some("confirm") => Some(Command::Toggle(FieldName::ConfirmPassword)),
                _ => None,
            },
            "oauth" => rest
                .and_then(|provider| OAuthProvider::from_str(provider.trim()))
                .map(Command::OAuth),
            "submit" if bare => Some(Command::Submit),
            "reset" if bare => Some(Command::Reset),
            "forgot" if bare => Some(Command::ForgotPassword),
            "status" if bare => Some(Command::Status),
            "help" if bare => Some(Command::Help),
            "quit" | "exit" if bare => Some(Command::Quit),
            _ => None,
        }
    }
}
