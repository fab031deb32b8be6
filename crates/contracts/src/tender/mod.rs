pub mod request;
pub mod response;

pub use request::{Category, CategorySelection, ProcurementType, SearchRequest};
pub use response::{SearchResponse, SearchStats, Source};

/// Имя файла отчёта, которое отдаёт backend по /tender/download
pub const REPORT_FILENAME: &str = "Закупки.xlsx";

/// Имя, под которым файл сохраняется локально: "Закупки_2026-08-30.xlsx"
pub fn suggested_download_name(date: chrono::NaiveDate) -> String {
    format!("Закупки_{}.xlsx", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn download_name_carries_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(suggested_download_name(date), "Закупки_2026-08-30.xlsx");
    }
}
