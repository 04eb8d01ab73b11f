use clap::{Parser, Subcommand, command};

#[derive(Parser)]
#[command()]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Build a person record and print it
    New {
        /// The numeric identifier, negative values allowed
        #[arg(allow_negative_numbers = true)]
        id: i64,
        /// The first name, taken verbatim
        first_name: String,
        /// The last name, taken verbatim
        last_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["personrs", "new", "1", "Ada", "Lovelace"], 1, "Ada", "Lovelace")]
    #[case(&["personrs", "new", "0", "", ""], 0, "", "")]
    #[case(&["personrs", "new", "-5", "X", "Y"], -5, "X", "Y")]
    fn parses_new(
        #[case] argv: &[&str],
        #[case] id: i64,
        #[case] first_name: &str,
        #[case] last_name: &str,
    ) {
        let args = Args::try_parse_from(argv).unwrap();

        assert_eq!(
            args.command,
            Some(Commands::New {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
        );
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let args = Args::try_parse_from(["personrs"]).unwrap();
        assert!(args.command.is_none());
    }

    #[rstest]
    #[case(&["personrs", "new", "abc", "Ada", "Lovelace"])]
    #[case(&["personrs", "new", "1", "Ada"])]
    fn rejects_bad_arguments(#[case] argv: &[&str]) {
        assert!(Args::try_parse_from(argv).is_err());
    }
}
