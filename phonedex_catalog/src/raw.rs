//! Reading the catalog file into untyped rows.

use csv::{ByteRecord, ReaderBuilder};
use std::io::Read;
use tracing::warn;

use phonedex_core::Result;

/// One catalog row as sourced. A field is `None` when its cell is empty or its
/// column is missing from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub phone_name: Option<String>,
    pub reviews: Option<String>,
    pub ram: Option<String>,
    pub rom: Option<String>,
    pub display_size: Option<String>,
    pub processor: Option<String>,
    pub battery: Option<String>,
    pub rear_camera: Option<String>,
    pub front_camera: Option<String>,
    pub current_price: Option<String>,
    pub original_price: Option<String>,
    pub image: Option<String>,
}

/// Header positions of the columns we know about.
#[derive(Debug, Default)]
struct ColumnMap {
    phone_name: Option<usize>,
    reviews: Option<usize>,
    ram: Option<usize>,
    rom: Option<usize>,
    display_size: Option<usize>,
    processor: Option<usize>,
    battery: Option<usize>,
    rear_camera: Option<usize>,
    front_camera: Option<usize>,
    current_price: Option<usize>,
    original_price: Option<usize>,
    image: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &ByteRecord) -> Self {
        let mut map = Self::default();
        for (idx, name) in headers.iter().enumerate() {
            let slot = match String::from_utf8_lossy(name).trim() {
                "Phone_Name" => &mut map.phone_name,
                "Reviews" => &mut map.reviews,
                "RAM" => &mut map.ram,
                "ROM" => &mut map.rom,
                "Display_Size" => &mut map.display_size,
                "Processor" => &mut map.processor,
                "Battery" => &mut map.battery,
                "Rear_Camera" => &mut map.rear_camera,
                "Front_Camera" => &mut map.front_camera,
                "Current_Price" => &mut map.current_price,
                "Original_Price" => &mut map.original_price,
                "image" => &mut map.image,
                _ => continue,
            };
            // First occurrence wins on duplicated headers.
            slot.get_or_insert(idx);
        }
        map
    }

    fn record(&self, row: &ByteRecord) -> RawRecord {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .filter(|bytes| !bytes.is_empty())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        };
        RawRecord {
            phone_name: cell(self.phone_name),
            reviews: cell(self.reviews),
            ram: cell(self.ram),
            rom: cell(self.rom),
            display_size: cell(self.display_size),
            processor: cell(self.processor),
            battery: cell(self.battery),
            rear_camera: cell(self.rear_camera),
            front_camera: cell(self.front_camera),
            current_price: cell(self.current_price),
            original_price: cell(self.original_price),
            image: cell(self.image),
        }
    }
}

/// Read every data row of a CSV source with a header row.
///
/// Rows may be shorter or longer than the header; missing cells read as
/// absent. A row the reader cannot split is logged and skipped.
pub fn read_raw_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(reader.byte_headers()?);
    if columns.phone_name.is_none() {
        warn!("Catalog has no Phone_Name column; every phone name will be empty");
    }

    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    let mut row_number = 0usize;
    loop {
        row_number += 1;
        match reader.read_byte_record(&mut row) {
            Ok(true) => records.push(columns.record(&row)),
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => warn!("Skipping malformed catalog row {row_number}: {e}"),
        }
    }

    Ok(records)
}
