use rusqlite::{Connection, Params, Row};

use log::info;
use std::path::Path;

pub struct Storage {
    connection: Connection,
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        let path = path.as_ref();
        info!("Open storage {:?}", path);
        Connection::open(path).map(|connection| Storage { connection })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(|connection| Storage { connection })
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn execute_batch(&self, sql: &str) -> rusqlite::Result<()> {
        self.connection.execute_batch(sql)
    }

    /// Maps every row of the table named after `K` (last path segment of its type name).
    pub fn find_all<K, T, E, M>(&self, map: M) -> Result<Vec<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        self.query_map::<K, T, E, _, M>([], "order by id", map)
    }

    fn query_map<K, T, E, P, M>(&self, params: P, clause: &str, mut map: M) -> Result<Vec<T>, E>
    where
        P: Params,
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let table = table_of::<K>();
        let mut statement = self
            .connection
            .prepare(&format!("select * from {} {}", table, clause))?;
        let mut rows = statement.query(params)?;
        let mut values = vec![];
        while let Some(row) = rows.next()? {
            values.push(map(row)?);
        }
        Ok(values)
    }
}

pub fn table_of<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    #[test]
    fn test_table_name_is_last_type_segment() {
        assert_eq!(table_of::<Sample>(), "Sample");
    }

    #[test]
    fn test_find_all_maps_rows_in_id_order() {
        let storage = Storage::open_in_memory().unwrap();
        storage
            .execute_batch(
                "create table Sample (id integer primary key, name text);
                 insert into Sample values (2, 'b');
                 insert into Sample values (1, 'a');",
            )
            .unwrap();
        let names = storage
            .find_all::<Sample, _, rusqlite::Error, _>(|row| row.get::<_, String>("name"))
            .unwrap();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }
}
