use crate::cultivating::{GridState, Key, Value, ValueType};
use crate::math::Cell;
use crate::persistence::EntrySnapshot;

const COMPOSITE_DEFAULT: &str = "0,0,0";

/// Reads live value as typed text, `None` when the key is absent.
pub fn read_entry(grid: &GridState, cell: Cell, key: Key) -> Option<EntrySnapshot> {
    grid.get(cell, key)?;
    let kind = key.hint();
    let value = match kind {
        ValueType::Bool => {
            let flag = grid.get_flag(cell, key);
            String::from(if flag { "True" } else { "False" })
        }
        ValueType::Int => grid.get_int(cell, key).unwrap_or(0).to_string(),
        ValueType::Float => grid.get_float(cell, key).unwrap_or(0.0).to_string(),
        ValueType::String => grid.get_text(cell, key).unwrap_or_default(),
        ValueType::Composite => match grid.get_text(cell, key) {
            Some(value) if !value.is_empty() => value,
            _ => COMPOSITE_DEFAULT.to_string(),
        },
    };
    Some(EntrySnapshot {
        key: key.name().to_string(),
        kind,
        value,
    })
}

/// Parses entry text into a live value. Unparseable text yields `None`.
pub fn parse_entry(entry: &EntrySnapshot) -> Option<Value> {
    match entry.kind {
        ValueType::Bool => parse_bool(&entry.value).map(Value::from),
        ValueType::Int => entry.value.trim().parse::<i64>().ok().map(Value::Int),
        ValueType::Float => entry.value.trim().parse::<f32>().ok().map(Value::Float),
        ValueType::String => Some(Value::Text(entry.value.clone())),
        ValueType::Composite => Some(Value::Text(if entry.value.is_empty() {
            COMPOSITE_DEFAULT.to_string()
        } else {
            entry.value.clone()
        })),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cultivating::GridId;

    #[test]
    fn test_flag_is_written_as_word_and_read_as_integer() {
        let mut grid = GridState::new(GridId(1), "farm");
        grid.set([0, 0], Key::Tilled, true);
        let entry = read_entry(&grid, [0, 0], Key::Tilled).unwrap();
        assert_eq!(entry.value, "True");
        assert_eq!(entry.kind, ValueType::Bool);
        assert_eq!(parse_entry(&entry), Some(Value::Int(1)));
    }

    #[test]
    fn test_absent_key_has_no_entry() {
        let grid = GridState::new(GridId(1), "farm");
        assert_eq!(read_entry(&grid, [0, 0], Key::WetUntil), None);
    }

    #[test]
    fn test_malformed_text_is_skipped() {
        let entry = EntrySnapshot {
            key: "wet_until".to_string(),
            kind: ValueType::Int,
            value: "soon".to_string(),
        };
        assert_eq!(parse_entry(&entry), None);
    }

    #[test]
    fn test_composite_defaults_to_origin() {
        let entry = EntrySnapshot {
            key: "anchor".to_string(),
            kind: ValueType::Composite,
            value: String::new(),
        };
        assert_eq!(parse_entry(&entry), Some(Value::Text("0,0,0".to_string())));
    }

    #[test]
    fn test_float_text_round_trips() {
        let entry = EntrySnapshot {
            key: "x".to_string(),
            kind: ValueType::Float,
            value: 0.1f32.to_string(),
        };
        assert_eq!(parse_entry(&entry), Some(Value::Float(0.1)));
    }
}
