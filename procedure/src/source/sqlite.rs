// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use super::LegSource;
use crate::error::Result;
use crate::leg::{FixRow, LegRow};

const APPROACH_LEGS: &str =
    "select * from approach_leg where approach_id = :id order by approach_leg_id";

const TRANSITION_LEGS: &str =
    "select * from transition_leg where transition_id = :id order by transition_leg_id";

const APPROACH_ID_FOR_LEG: &str =
    "select approach_id as id from approach_leg where approach_leg_id = :id";

const TRANSITION_ID_FOR_LEG: &str =
    "select transition_id as id from transition_leg where transition_leg_id = :id";

const APPROACH_ID_FOR_TRANSITION: &str =
    "select approach_id as id from transition where transition_id = :id";

/// Legs read from the `approach_leg`, `transition_leg` and `transition`
/// tables of a navigation database.
///
/// Statements are prepared once per connection and cached.
#[derive(Debug)]
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens the database at the path.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Connection::open(path)?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns the connection, releasing the cached statements.
    pub fn into_connection(self) -> Connection {
        self.conn.flush_prepared_statement_cache();
        self.conn
    }

    fn legs(&self, sql: &str, id: i64, table: LegTable) -> Result<Vec<LegRow>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(named_params! { ":id": id }, |row| leg_row(row, table))?;

        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn id(&self, sql: &str, id: i64) -> Result<Option<i64>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let id = stmt
            .query_row(named_params! { ":id": id }, |row| row.get("id"))
            .optional()?;

        Ok(id)
    }
}

impl LegSource for SqliteSource {
    fn approach_legs(&self, approach_id: i64) -> Result<Vec<LegRow>> {
        self.legs(APPROACH_LEGS, approach_id, LegTable::Approach)
    }

    fn transition_legs(&self, transition_id: i64) -> Result<Vec<LegRow>> {
        self.legs(TRANSITION_LEGS, transition_id, LegTable::Transition)
    }

    fn approach_id_for_leg(&self, leg_id: i64) -> Result<Option<i64>> {
        self.id(APPROACH_ID_FOR_LEG, leg_id)
    }

    fn transition_id_for_leg(&self, leg_id: i64) -> Result<Option<i64>> {
        self.id(TRANSITION_ID_FOR_LEG, leg_id)
    }

    fn approach_id_for_transition(&self, transition_id: i64) -> Result<Option<i64>> {
        self.id(APPROACH_ID_FOR_TRANSITION, transition_id)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum LegTable {
    Approach,
    Transition,
}

/// Reads a leg row. Transition legs have no missed approach flag.
fn leg_row(row: &Row<'_>, table: LegTable) -> rusqlite::Result<LegRow> {
    let number = |column: &str| -> rusqlite::Result<f32> {
        Ok(row.get::<_, Option<f64>>(column)?.unwrap_or_default() as f32)
    };

    let flag = |column: &str| -> rusqlite::Result<bool> {
        Ok(row.get::<_, Option<bool>>(column)?.unwrap_or_default())
    };

    let text = |column: &str| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
    };

    let (leg_id, missed) = match table {
        LegTable::Approach => (row.get("approach_leg_id")?, flag("is_missed")?),
        LegTable::Transition => (row.get("transition_leg_id")?, false),
    };

    Ok(LegRow {
        leg_id,
        missed,
        leg_type: text("type")?,
        turn_direction: row.get("turn_direction")?,
        fix: FixRow {
            kind: row.get("fix_type")?,
            nav_id: row.get::<_, Option<i64>>("fix_nav_id")?.unwrap_or_default(),
            ident: text("fix_ident")?,
            region: text("fix_region")?,
        },
        rec_fix: FixRow {
            kind: row.get("recommended_fix_type")?,
            nav_id: row
                .get::<_, Option<i64>>("recommended_fix_nav_id")?
                .unwrap_or_default(),
            ident: text("recommended_fix_ident")?,
            region: text("recommended_fix_region")?,
        },
        flyover: flag("is_flyover")?,
        true_course: flag("is_true_course")?,
        course: number("course")?,
        distance: number("distance")?,
        time: number("time")?,
        theta: number("theta")?,
        rho: number("rho")?,
        altitude1: number("altitude1")?,
        altitude2: number("altitude2")?,
        alt_descriptor: row.get("alt_descriptor")?,
    })
}
