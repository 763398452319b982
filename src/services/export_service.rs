use crate::error::Result;
use crate::models::candidate::Candidate;
use rust_xlsxwriter::*;
use std::collections::HashMap;

pub struct ExportService;

impl ExportService {
    /// Builds a single-sheet workbook with one row per candidate.
    pub fn generate_candidates_xlsx(
        candidates: &[Candidate],
        job_titles: &HashMap<i64, String>,
    ) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Candidates")?;

        let header_bg = Color::RGB(0x0F172A);
        let border_color = Color::RGB(0xE2E8F0);
        let alt_row = Color::RGB(0xF8FAFC);

        let columns = [
            ("ID", 8.0),
            ("Name", 28.0),
            ("Email", 30.0),
            ("Phone", 18.0),
            ("Position", 24.0),
            ("Job", 30.0),
            ("Status", 20.0),
            ("CV", 40.0),
            ("Added", 20.0),
        ];

        for (i, (_, width)) in columns.iter().enumerate() {
            worksheet.set_column_width(i as u16, *width)?;
        }

        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(header_bg)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);

        for (i, (title, _)) in columns.iter().enumerate() {
            worksheet.write_string_with_format(0, i as u16, *title, &header_format)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        let plain = Format::new()
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);
        let shaded = plain.clone().set_background_color(alt_row);

        for (idx, candidate) in candidates.iter().enumerate() {
            let row = (idx + 1) as u32;
            let format = if idx % 2 == 0 { &plain } else { &shaded };
            let job = candidate
                .job_id
                .and_then(|id| job_titles.get(&id))
                .map(String::as_str)
                .unwrap_or("");
            let added = candidate.created_at.format("%Y-%m-%d %H:%M").to_string();

            worksheet.write_number_with_format(row, 0, candidate.id as f64, format)?;
            let cells = [
                candidate.name.as_str(),
                candidate.email.as_deref().unwrap_or(""),
                candidate.phone.as_deref().unwrap_or(""),
                candidate.position.as_deref().unwrap_or(""),
                job,
                candidate.status.as_str(),
                candidate.cv.as_deref().unwrap_or(""),
                added.as_str(),
            ];
            for (offset, value) in cells.iter().enumerate() {
                worksheet.write_string_with_format(row, (offset + 1) as u16, *value, format)?;
            }
        }

        if !candidates.is_empty() {
            worksheet.autofilter(0, 0, candidates.len() as u32, (columns.len() - 1) as u16)?;
        }

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn workbook_is_a_zip_container() {
        let candidates = vec![Candidate {
            id: 1,
            name: "Asha".into(),
            email: Some("asha@example.com".into()),
            phone: None,
            position: Some("QA".into()),
            status: "Applied".into(),
            company_id: None,
            job_id: Some(4),
            cv: None,
            created_at: Utc::now(),
        }];
        let titles = HashMap::from([(4, "QA Engineer".to_string())]);
        let bytes = ExportService::generate_candidates_xlsx(&candidates, &titles).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn empty_export_still_has_header() {
        let bytes = ExportService::generate_candidates_xlsx(&[], &HashMap::new()).unwrap();
        assert!(!bytes.is_empty());
    }
}
