use crate::settings::{DEFAULT_INCLUDE, DEFAULT_LENGTH, MAX_COUNT, MAX_LENGTH};
use crate::terminal::HelpBox;

pub fn help_text() -> String {
    HelpBox::new("genpass")
        .center("Random password generator")
        .blank()
        .line("USAGE:")
        .line("  genpass [OPTIONS]")
        .blank()
        .line("OPTIONS:")
        .line(" Password:")
        .opt(
            "  -len <N>",
            &format!("Password length (default: {DEFAULT_LENGTH}, max: {MAX_LENGTH})"),
        )
        .opt(
            "  -inc <CODES>",
            &format!(
                "Categories to include: l lowercase, u uppercase, n numbers, \
                 s symbols (default: {DEFAULT_INCLUDE}). Empty selects all."
            ),
        )
        .opt("  -exc <CHARS>", "Characters to exclude from the output")
        .opt(
            "  -n <N>",
            &format!("Number of passwords, one per line (default: 1, max: {MAX_COUNT})"),
        )
        .blank()
        .line(" Entropy:")
        .opt("  -urandom", "Read every draw from the OS entropy source")
        .opt("  -seed <N>", "Deterministic output for a given seed (not for real passwords)")
        .blank()
        .line(" Info:")
        .opt("  -v", "Print diagnostics to stderr")
        .opt("  -h, -help", "Display this help message")
        .opt("  -version", "Display version")
        .blank()
        .line("EXAMPLES:")
        .line("  genpass                  12 characters from every category")
        .line("  genpass -len 16          16-character password")
        .line("  genpass -inc l,n         Lowercase letters and digits only")
        .line("  genpass -exc \"0O1Il\"     Skip look-alike characters")
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::BOX_WIDTH;

    #[test]
    fn help_lists_every_flag_inside_the_box() {
        let text = help_text();
        for flag in ["-len", "-inc", "-exc", "-n <N>", "-urandom", "-seed", "-version"] {
            assert!(text.contains(flag), "missing {flag}");
        }
        assert!(text.lines().all(|row| row.chars().count() == BOX_WIDTH));
    }
}
