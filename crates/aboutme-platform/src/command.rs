use std::str::FromStr;

/// One line of runner input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert text at the caret of the focused (or first) text field.
    Type(String),
    Backspace,
    Clear,
    /// Activate the button with this label.
    Tap(String),
    /// Save, tear down and restore the screen.
    Rotate,
    Dump,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = match line.split_once(' ') {
            Some((w, r)) => (w, r),
            None => (line, ""),
        };
        let cmd = match word {
            "type" => Command::Type(rest.to_string()),
            "backspace" => Command::Backspace,
            "clear" => Command::Clear,
            "tap" if !rest.trim().is_empty() => Command::Tap(rest.trim().to_string()),
            "tap" => anyhow::bail!("tap needs a button label"),
            "rotate" => Command::Rotate,
            "dump" => Command::Dump,
            "quit" | "exit" => Command::Quit,
            other => anyhow::bail!(
                "unknown command {other:?} (expected type, backspace, clear, tap, rotate, dump, quit)"
            ),
        };
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_keeps_inner_spaces_verbatim() {
        assert_eq!(
            "type  Big Cat ".parse::<Command>().unwrap(),
            Command::Type(" Big Cat ".to_string())
        );
        assert_eq!("type".parse::<Command>().unwrap(), Command::Type(String::new()));
    }

    #[test]
    fn tap_trims_the_label() {
        assert_eq!(
            "tap  Done ".parse::<Command>().unwrap(),
            Command::Tap("Done".to_string())
        );
        assert!("tap".parse::<Command>().is_err());
    }

    #[test]
    fn unknown_words_are_rejected() {
        let err = "jump".parse::<Command>().unwrap_err();
        assert!(err.to_string().starts_with("unknown command \"jump\""));
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }
}
