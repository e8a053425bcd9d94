use super::board::Board;
use crate::error::GameError;

const ROW_SEPARATOR: char = ';';
const COLUMN_SEPARATOR: char = ',';

/// Board text form used at the storage boundary: rows joined by `;`,
/// cells within a row joined by `,`, e.g. `"2,0;0,4"`.
pub fn encode(board: &Board) -> String {
    board
        .to_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(&COLUMN_SEPARATOR.to_string())
        })
        .collect::<Vec<_>>()
        .join(&ROW_SEPARATOR.to_string())
}

/// Parses stored board text. Anything that is not a square grid of base-10
/// integers is reported as corrupt state, never silently defaulted.
pub fn decode(text: &str) -> Result<Board, GameError> {
    if text.trim().is_empty() {
        return Err(GameError::CorruptState(
            "Stored board text is empty".to_string(),
        ));
    }

    let mut rows: Vec<Vec<u32>> = Vec::new();
    for row_text in text.split(ROW_SEPARATOR) {
        let mut row = Vec::new();
        for field in row_text.split(COLUMN_SEPARATOR) {
            let value: u32 = field.parse().map_err(|_| {
                GameError::CorruptState(format!(
                    "Invalid cell value {:?} in stored board",
                    field
                ))
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    let size = rows.len();
    if rows.iter().any(|row| row.len() != size) {
        return Err(GameError::CorruptState(format!(
            "Stored board is not square: {} rows", size
        )));
    }

    Ok(Board::from_rows(rows))
}
