//!
//! XLSX worksheet for benchmark history data.
//!

use std::collections::HashMap;
use std::collections::HashSet;

///
/// XLSX worksheet for benchmark history data.
///
/// Rows are benchmarked operations, columns are runs.
///
#[derive(Default)]
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Operation row indexes in the worksheet.
    pub rows: HashMap<String, u32>,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;

    /// Maximum length of a worksheet name allowed by Excel.
    const NAME_MAX_LENGTH: usize = 31;

    /// Number of columns in an Excel worksheet.
    pub const COLUMN_LIMIT: u16 = 16_384;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(Self::sanitize_name(name))?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                header_name.to_owned(),
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }

        Ok(Self {
            worksheet,
            rows: HashMap::new(),
            headers,
        })
    }

    ///
    /// Adds a new column for a run.
    ///
    pub fn add_run_column(&mut self, run_label: &str, run_id: u16) -> anyhow::Result<u16> {
        let column_index = self.run_column(run_id)?;
        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            0,
            column_index,
            run_label,
            &Self::column_header_format(),
        )?;

        Ok(run_id)
    }

    ///
    /// Writes a value of an operation, adding its row if needed.
    ///
    pub fn write_operation_value(
        &mut self,
        suite: &str,
        operation: &str,
        run_id: u16,
        value: f64,
    ) -> anyhow::Result<()> {
        let row_identifier = format!("{suite}::{operation}");
        let row_index = if let Some(index) = self.rows.get(row_identifier.as_str()) {
            *index
        } else {
            let row_index = (self.rows.len() as u32) + 1;
            self.rows.insert(row_identifier, row_index);

            self.worksheet
                .write_with_format(row_index, 0, suite, &Self::row_header_format())?;
            self.worksheet
                .write_with_format(row_index, 1, operation, &Self::row_header_format())?;

            row_index
        };

        let column_index = self.run_column(run_id)?;
        self.worksheet
            .write_with_format(row_index, column_index, value, &Self::value_format())?;
        Ok(())
    }

    ///
    /// Sets totals and medians for each run column.
    ///
    pub fn set_totals(&mut self, run_count: u16) -> anyhow::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let last_data_row_index = self.rows.len() + 1;

        for (total_row_index, (summary_name, function)) in
            [("Total", "SUM"), ("Median", "MEDIAN")]
                .into_iter()
                .enumerate()
        {
            let value_row_index = (last_data_row_index + total_row_index) as u32;

            for column_index in 0..self.headers.len() {
                let total_caption = if column_index == self.headers.len() - 1 {
                    summary_name
                } else {
                    ""
                };
                self.worksheet.write_with_format(
                    value_row_index,
                    column_index as u16,
                    total_caption,
                    &Self::row_header_summary_format(),
                )?;
            }

            for run_id in 0..run_count {
                let column_index = self.run_column(run_id)?;
                let column_name = Self::column_identifier(column_index);
                let formula =
                    format!("{function}({column_name}2:{column_name}{last_data_row_index})");
                self.worksheet.write_formula_with_format(
                    value_row_index,
                    column_index,
                    formula.as_str(),
                    &Self::value_format(),
                )?;
            }
        }

        Ok(())
    }

    ///
    /// Sets the relative difference between two run columns, placed after all run columns.
    ///
    pub fn set_diffs(
        &mut self,
        reference_id: u16,
        reference_label: &str,
        candidate_id: u16,
        candidate_label: &str,
        total_runs: u16,
    ) -> anyhow::Result<()> {
        let column_identifier = format!("{candidate_label}\n--- vs ---\n{reference_label}");
        let column_index = self.run_column(total_runs)?;
        let candidate_column = Self::column_identifier(self.run_column(candidate_id)?);
        let reference_column = Self::column_identifier(self.run_column(reference_id)?);
        self.worksheet.write_with_format(
            0,
            column_index,
            column_identifier,
            &Self::column_comparison_header_format(),
        )?;
        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;

        for row_id in 0..self.rows.len() + 2 {
            self.worksheet.write_formula_with_format(
                (row_id + 1) as u32,
                column_index,
                format!(
                    r#"=IF(AND({0}{2}<>"", {1}{2}<>"", {0}{2}<>0, {1}{2}<>0), ({0}{2}-{1}{2}) / {1}{2}, "")"#,
                    candidate_column,
                    reference_column,
                    row_id + 2
                )
                .as_str(),
                &Self::percent_format(),
            )?;
        }

        Ok(())
    }

    ///
    /// Returns the column index of a run, failing beyond the worksheet column limit.
    ///
    pub fn run_column(&self, run_id: u16) -> anyhow::Result<u16> {
        u16::try_from(self.headers.len())
            .ok()
            .and_then(|headers| headers.checked_add(run_id))
            .filter(|column_index| *column_index < Self::COLUMN_LIMIT)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Too many runs: run #{run_id} does not fit into {} worksheet columns",
                    Self::COLUMN_LIMIT
                )
            })
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the alphabetical column identifier by its zero-based index.
    ///
    pub fn column_identifier(index: u16) -> String {
        let mut identifier = String::new();
        let mut index = (index as u32) + 1;

        while index > 0 {
            let remainder = (index - 1) % 26;
            identifier.insert(0, (b'A' + remainder as u8) as char);
            index = (index - 1) / 26;
        }

        identifier
    }

    ///
    /// Replaces the characters Excel forbids in worksheet names, e.g. `ns/op` becomes `ns per op`.
    ///
    pub fn sanitize_name(name: &str) -> String {
        let name = name.replace('/', " per ");
        let name: String = name
            .chars()
            .map(|character| match character {
                '\\' | '?' | '*' | '[' | ']' | ':' => '_',
                character => character,
            })
            .take(Self::NAME_MAX_LENGTH)
            .collect();
        name.trim_matches('\'').to_owned()
    }

    ///
    /// Returns a sanitized worksheet name not present in `taken`, adding a numeric suffix if needed.
    ///
    /// Excel compares worksheet names case-insensitively, so `taken` holds lowercase names.
    ///
    pub fn unique_name(name: &str, taken: &HashSet<String>) -> String {
        let name = Self::sanitize_name(name);
        if !taken.contains(name.to_lowercase().as_str()) {
            return name;
        }
        (2..)
            .map(|index| {
                let suffix = format!(" ({index})");
                let base: String = name
                    .chars()
                    .take(Self::NAME_MAX_LENGTH - suffix.len())
                    .collect();
                format!("{base}{suffix}")
            })
            .find(|candidate| !taken.contains(candidate.to_lowercase().as_str()))
            .unwrap_or(name)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(16)
            .set_font_color("#FFFFFF")
            .set_background_color("#00ADD8")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::VerticalCenter)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#E6F7FB")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::Top)
            .set_text_wrap()
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_comparison_header_format() -> rust_xlsxwriter::Format {
        Self::column_header_format()
            .set_font_size(11)
            .set_align(rust_xlsxwriter::FormatAlign::VerticalCenter)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#CCEFF7")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_summary_format() -> rust_xlsxwriter::Format {
        Self::row_header_format()
            .set_font_size(16)
            .set_bold()
            .set_align(rust_xlsxwriter::FormatAlign::Right)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#000000")
            .set_background_color("#FFFFFF")
            .set_align(rust_xlsxwriter::FormatAlign::Right)
            .set_border(rust_xlsxwriter::FormatBorder::None)
            .set_num_format("#,##0.###")
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn percent_format() -> rust_xlsxwriter::Format {
        Self::value_format().set_num_format("0.000%")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Worksheet;

    #[test]
    fn column_identifier() {
        assert_eq!(Worksheet::column_identifier(0), "A");
        assert_eq!(Worksheet::column_identifier(25), "Z");
        assert_eq!(Worksheet::column_identifier(26), "AA");
        assert_eq!(Worksheet::column_identifier(701), "ZZ");
        assert_eq!(Worksheet::column_identifier(702), "AAA");
    }

    #[test]
    fn sanitize_name() {
        assert_eq!(Worksheet::sanitize_name("ns/op"), "ns per op");
        assert_eq!(Worksheet::sanitize_name("allocs/op"), "allocs per op");
        assert_eq!(Worksheet::sanitize_name("[x]:y"), "_x__y");
        assert_eq!(Worksheet::sanitize_name(&"a".repeat(40)).len(), 31);
    }

    #[test]
    fn unique_name() {
        let mut taken = HashSet::new();
        taken.insert("mb per s".to_owned());
        assert_eq!(Worksheet::unique_name("MB/s", &taken), "MB per s (2)");
        taken.insert("mb per s (2)".to_owned());
        assert_eq!(Worksheet::unique_name("MB per s", &taken), "MB per s (3)");
        assert_eq!(Worksheet::unique_name("ns/op", &taken), "ns per op");

        let long = "b".repeat(40);
        taken.insert(Worksheet::sanitize_name(&long));
        let unique = Worksheet::unique_name(&long, &taken);
        assert_eq!(unique.len(), 31);
        assert!(unique.ends_with(" (2)"));
    }

    #[test]
    fn run_column_limit() {
        let worksheet =
            Worksheet::new("ns/op", vec![("Suite", 24), ("Operation", 40)]).expect("Valid name");
        assert_eq!(worksheet.run_column(0).expect("In range"), 2);
        assert_eq!(
            worksheet
                .run_column(Worksheet::COLUMN_LIMIT - 3)
                .expect("In range"),
            Worksheet::COLUMN_LIMIT - 1
        );
        assert!(worksheet.run_column(Worksheet::COLUMN_LIMIT - 2).is_err());
        assert!(worksheet.run_column(u16::MAX).is_err());
    }
}
