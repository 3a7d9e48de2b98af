use anyhow::Result;
use colored::*;
use std::io::Write;

use crate::rules::RuleTable;

/// Print a table's categories in priority order.
pub fn list_rules<W: Write>(table: &RuleTable, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{} {}",
        "Rule table".bold().blue(),
        table.variant().to_string().bold()
    )?;

    for (priority, category) in table.categories().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "{}. {} -> {}",
            priority + 1,
            category.kind.to_string().bold(),
            category
                .implied()
                .as_known()
                .map_or_else(|| "any".to_string(), ToString::to_string)
                .cyan()
        )?;
        if !category.exact.is_empty() {
            let names: Vec<&str> = category.exact.iter().map(String::as_str).collect();
            writeln!(out, "   exact {}", names.join(", "))?;
        }
        for pattern in &category.patterns {
            writeln!(out, "   {pattern}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_categories_in_order() {
        let mut out = Vec::new();
        list_rules(RuleTable::props(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let handler = text.find("1. ").unwrap();
        let node = text.find("2. ").unwrap();
        let unknown = text.find("9. ").unwrap();
        assert!(handler < node && node < unknown);
        assert!(text.contains("exact children"));
        assert!(text.contains("prefix on*"));
        assert!(text.contains("any name"));
    }
}
