//! Workbook access through calamine
//!
//! Opens a workbook, picks its active worksheet and exposes the data rows
//! below the header as a forward-only iterator of [`SheetRow`]s. Formula
//! cells yield their cached results.
//!
//! calamine does not expose which tab is active, so for xlsx workbooks the
//! `activeTab` attribute of `<workbookView>` is read from `xl/workbook.xml`.

use crate::{Error, Result};
use calamine::{Data, Range, Reader, Sheet, SheetType, Sheets, open_workbook_auto};
use quick_xml::Reader as XmlReader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error};

const WORKBOOK_PART: &str = "xl/workbook.xml";

static EMPTY_CELL: Data = Data::Empty;

/// The worksheet selected for conversion
#[derive(Debug, Clone)]
pub struct ActiveSheet {
    /// Worksheet name as shown in the workbook
    pub name: String,

    /// Used cell range of the worksheet
    pub range: Range<Data>,
}

/// Open any workbook format calamine understands
pub fn open_workbook(path: &Path) -> Result<Sheets<BufReader<File>>> {
    open_workbook_auto(path).map_err(|e| Error::workbook(path, "failed to open workbook", e))
}

/// Read `activeTab` from the first `<workbookView>` of a workbook part
///
/// Returns `None` when the attribute is missing.
pub fn parse_active_tab<R: BufRead>(source: R) -> std::result::Result<Option<usize>, String> {
    let mut reader = XmlReader::from_reader(source);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).map_err(|e| e.to_string())? {
            Event::Start(element) | Event::Empty(element)
                if element.local_name().as_ref() == b"workbookView" =>
            {
                let attribute = element
                    .try_get_attribute("activeTab")
                    .map_err(|e| e.to_string())?;
                return match attribute {
                    Some(attribute) => {
                        let value = attribute.unescape_value().map_err(|e| e.to_string())?;
                        value
                            .trim()
                            .parse::<usize>()
                            .map(Some)
                            .map_err(|e| format!("invalid activeTab '{}': {}", value, e))
                    }
                    None => Ok(None),
                };
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}

/// Index of the active tab of the workbook at `path`
///
/// Workbooks that are not zip packages or carry no `xl/workbook.xml` (xls,
/// xlsb, ods) fall back to the first tab.
pub fn read_active_tab(path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| Error::io(format!("opening {}", path.display()), e))?;

    let mut archive = match zip::ZipArchive::new(BufReader::new(file)) {
        Ok(archive) => archive,
        Err(e) => {
            debug!("{} is not a zip package ({}), using first tab", path.display(), e);
            return Ok(0);
        }
    };

    let part = match archive.by_name(WORKBOOK_PART) {
        Ok(part) => part,
        Err(e) => {
            debug!("{} has no {} ({}), using first tab", path.display(), WORKBOOK_PART, e);
            return Ok(0);
        }
    };

    let active_tab = parse_active_tab(BufReader::new(part))
        .map_err(|message| Error::workbook_metadata(path, message))?
        .unwrap_or(0);

    debug!("Active tab of {} is {}", path.display(), active_tab);
    Ok(active_tab)
}

/// Pick the active worksheet from workbook metadata
///
/// The sheet at `active_tab` is selected whatever its visibility, but only
/// if it is a worksheet. A chart sheet or an out-of-range tab selects nothing.
pub fn select_active_sheet(sheets: &[Sheet], active_tab: usize) -> Option<&Sheet> {
    sheets
        .get(active_tab)
        .filter(|sheet| matches!(sheet.typ, SheetType::WorkSheet))
}

/// Open `path` and load its active worksheet
pub fn read_active_sheet(path: &Path) -> Result<ActiveSheet> {
    let mut workbook = open_workbook(path)?;
    let active_tab = read_active_tab(path)?;

    let name = match select_active_sheet(workbook.sheets_metadata(), active_tab) {
        Some(sheet) => sheet.name.clone(),
        None => {
            error!("No active worksheet found in {}", path.display());
            return Err(Error::no_active_worksheet(path));
        }
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| Error::workbook(path, format!("failed to read worksheet '{}'", name), e))?;

    debug!(
        "Loaded worksheet '{}' with {} rows x {} columns",
        name,
        range.height(),
        range.width()
    );

    Ok(ActiveSheet { name, range })
}

/// One worksheet row addressed by absolute column index
#[derive(Debug, Clone, Copy)]
pub struct SheetRow<'a> {
    /// 1-based row number as shown in a spreadsheet application
    pub number: usize,
    first_column: usize,
    cells: &'a [Data],
}

impl<'a> SheetRow<'a> {
    /// Wrap cells that start at absolute column `first_column`
    pub fn new(number: usize, first_column: usize, cells: &'a [Data]) -> Self {
        Self {
            number,
            first_column,
            cells,
        }
    }

    /// Cell at absolute 0-based `column`, empty when outside the used range
    pub fn cell(&self, column: usize) -> &'a Data {
        column
            .checked_sub(self.first_column)
            .and_then(|offset| self.cells.get(offset))
            .unwrap_or(&EMPTY_CELL)
    }
}

/// Rows after the first `header_rows` worksheet rows
///
/// The used range may not start at A1, so row and column positions are
/// translated back to absolute worksheet coordinates.
pub fn data_rows(range: &Range<Data>, header_rows: usize) -> impl Iterator<Item = SheetRow<'_>> {
    let (first_row, first_column) = range
        .start()
        .map(|(row, column)| (row as usize, column as usize))
        .unwrap_or((0, 0));

    range
        .rows()
        .enumerate()
        .map(move |(offset, cells)| (first_row + offset, cells))
        .filter(move |(absolute_row, _)| *absolute_row >= header_rows)
        .map(move |(absolute_row, cells)| SheetRow::new(absolute_row + 1, first_column, cells))
}
