//! Minimal SQL syntax highlighting for terminal output

use colored::Colorize;

const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "CREATE",
    "DROP", "ALTER", "TABLE", "INDEX", "JOIN", "INNER", "LEFT", "RIGHT", "OUTER", "ON", "AND",
    "OR", "NOT", "NULL", "IS", "IN", "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET", "AS",
    "DISTINCT", "UNION", "ALL", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "DEFAULT", "BEGIN",
    "COMMIT", "ROLLBACK",
];

/// Colorize keywords, string literals and numbers in a rendered query line.
///
/// Keywords are matched case-insensitively; everything else passes through
/// unchanged. Whether color codes are actually emitted is up to `colored`'s
/// global tty detection and overrides.
pub fn highlight_sql(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            let mut literal = String::from(c);
            for d in chars.by_ref() {
                literal.push(d);
                if d == '\'' {
                    break;
                }
            }
            out.push_str(&literal.green().to_string());
        } else if c.is_ascii_digit() {
            let mut number = String::from(c);
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() || d == '.' {
                    number.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            out.push_str(&number.yellow().to_string());
        } else if c.is_alphabetic() || c == '_' {
            let mut word = String::from(c);
            while let Some(&d) = chars.peek() {
                if d.is_alphanumeric() || d == '_' {
                    word.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            if KEYWORDS.contains(&word.to_ascii_uppercase().as_str()) {
                out.push_str(&word.cyan().to_string());
            } else {
                out.push_str(&word);
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_preserves_text() {
        // colored's override is process-global, so both directions are
        // exercised in a single test
        colored::control::set_override(false);
        let plain = highlight_sql("select id from users where name = 'bob' limit 10");
        assert_eq!(plain, "select id from users where name = 'bob' limit 10");

        colored::control::set_override(true);
        let colorized = highlight_sql("select 1");
        assert!(colorized.contains("\u{1b}["));
        assert!(colorized.contains("select"));
        colored::control::unset_override();
    }
}
