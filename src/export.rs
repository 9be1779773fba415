//! 물성 표 CSV 저장/불러오기.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::material::{PropertyRecord, PropertyTable};

const HEADER: [&str; 3] = ["Properties", "Metric", "English"];

/// CSV 입출력 오류.
#[derive(Debug)]
pub enum ExportError {
    /// 파일 입출력 오류
    Io(io::Error),
    /// CSV 형식 오류
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ExportError::Csv(e) => write!(f, "CSV 오류: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        ExportError::Io(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        ExportError::Csv(value)
    }
}

/// `Properties,Metric,English` 머리글과 함께 표를 기록한다.
pub fn write_table<W: io::Write>(writer: W, table: &PropertyTable) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for record in table {
        csv_writer.write_record([&record.property, &record.metric, &record.imperial])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_table_file(path: &Path, table: &PropertyTable) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_table(file, table)
}

/// [`write_table`]로 저장한 CSV를 다시 읽는다. 열이 부족한 행은 빈 값으로 채운다.
pub fn read_table<R: io::Read>(reader: R) -> Result<PropertyTable, ExportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        records.push(PropertyRecord {
            property: field(0),
            metric: field(1),
            imperial: field(2),
        });
    }
    Ok(PropertyTable::from_records(records))
}

pub fn read_table_file(path: &Path) -> Result<PropertyTable, ExportError> {
    let file = File::open(path)?;
    read_table(file)
}
