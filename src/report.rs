//! Rendering of conversion results for the terminal.

use std::io;
use std::io::Write;
use pad::{PadStr, Alignment};
use crate::convert::{ConversionResult, PayQuote};
use crate::units::{Money, TimeUnit};

/// How a batch of conversions is laid out.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Layout {
    /// A block per quote, one line per unit.
    List,
    /// A row per quote, one column per unit.
    Table
}

impl Default for Layout {
    fn default() -> Self {
        Layout::List
    }
}

fn quote_heading(quote: &PayQuote) -> String {
    format!("{} per {}", Money::from(quote.value), quote.unit)
}

/// Write each quote as a heading followed by its amount in every unit in
/// `units`, labels and amounts each aligned in their own column.
pub fn render_list<W: Write>(out: &mut W, entries: &[(PayQuote, ConversionResult)], units: &[TimeUnit]) -> io::Result<()> {
    let label_width = units.iter().map(|unit| unit.adjective().len() + 1).max().unwrap_or(0);

    for (i, (quote, result)) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        writeln!(out, "{}:", quote_heading(quote))?;

        let amounts : Vec<String> = units.iter().map(|unit| Money::from(result[*unit]).to_string()).collect();
        let amount_width = amounts.iter().map(|amount| amount.len()).max().unwrap_or(0);

        for (unit, amount) in units.iter().zip(amounts.iter()) {
            let label = format!("{}:", unit.adjective());

            writeln!(out, "    {} {}", label.pad_to_width(label_width), amount.pad_to_width_with_alignment(amount_width, Alignment::Right))?;
        }
    }

    Ok(())
}

/// Write all quotes as one table: a header row, then a row per quote.
pub fn render_table<W: Write>(out: &mut W, entries: &[(PayQuote, ConversionResult)], units: &[TimeUnit]) -> io::Result<()> {
    let mut rows : Vec<Vec<String>> = Vec::with_capacity(entries.len() + 1);

    let mut header = vec!["Quote".to_string()];
    header.extend(units.iter().map(|unit| unit.adjective().to_string()));
    rows.push(header);

    for (quote, result) in entries {
        let mut row = vec![quote_heading(quote)];
        row.extend(units.iter().map(|unit| Money::from(result[*unit]).to_string()));
        rows.push(row);
    }

    let widths : Vec<usize> = (0..units.len() + 1).map(|col| rows.iter().map(|row| row[col].len()).max().unwrap_or(0)).collect();

    for row in rows.iter() {
        let mut line = String::new();

        for (col, cell) in row.iter().enumerate() {
            if col == 0 {
                line.push_str(&cell.pad_to_width(widths[col]));
            } else {
                line.push_str("  ");
                line.push_str(&cell.pad_to_width_with_alignment(widths[col], Alignment::Right));
            }
        }

        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}

pub fn render<W: Write>(out: &mut W, layout: Layout, entries: &[(PayQuote, ConversionResult)], units: &[TimeUnit]) -> io::Result<()> {
    match layout {
        Layout::List => render_list(out, entries, units),
        Layout::Table => render_table(out, entries, units)
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::{convert, PayQuote};
    use crate::report::{render, Layout};
    use crate::schedule::Schedule;
    use crate::units::TimeUnit;

    fn rendered(layout: Layout, quotes: &[PayQuote], units: &[TimeUnit]) -> String {
        let schedule = Schedule::default();
        let entries : Vec<_> = quotes.iter().map(|quote| (*quote, convert(quote, &schedule))).collect();
        let mut out = Vec::new();

        render(&mut out, layout, &entries, units).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn list_all_units() {
        let text = rendered(Layout::List, &[PayQuote::new(20.0, TimeUnit::Hour)], &TimeUnit::ALL);

        assert_eq!(text, "$20.00 per hour:\n    Hourly:      $20.00\n    Weekly:     $800.00\n    Monthly:  $3,476.19\n    Yearly:  $41,714.29\n");
    }

    #[test]
    fn list_selected_units() {
        let text = rendered(Layout::List, &[PayQuote::new(2000.0, TimeUnit::Month), PayQuote::new(0.0, TimeUnit::Hour)], &[TimeUnit::Year]);

        assert_eq!(text, "$2,000.00 per month:\n    Yearly: $24,000.00\n\n$0.00 per hour:\n    Yearly: $0.00\n");
    }

    #[test]
    fn table_layout() {
        let text = rendered(Layout::Table, &[PayQuote::new(20.0, TimeUnit::Hour), PayQuote::new(2000.0, TimeUnit::Month)], &[TimeUnit::Hour, TimeUnit::Year]);
        let lines : Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Quote                Hourly      Yearly");
        assert_eq!(lines[1], "$20.00 per hour      $20.00  $41,714.29");
        assert_eq!(lines[2], "$2,000.00 per month  $11.51  $24,000.00");
    }

    #[test]
    fn empty_batch() {
        assert_eq!(rendered(Layout::List, &[], &TimeUnit::ALL), "");
        assert_eq!(rendered(Layout::Table, &[], &[TimeUnit::Hour]), "Quote  Hourly\n");
    }
}
