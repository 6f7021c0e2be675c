//! Append-only credential ledger backed by a CSV file.
//!
//! The file starts with the header row `Timestamp,Username,Email` and holds
//! one row per registration. Complete rows are never rewritten or removed;
//! a trailing row torn by an interrupted write is cut off before the next
//! append.

use crate::csv_row::Row;
use crate::{HEADER, LedgerError, Result as LedgerResult, encode_row, parse_rows};

use bt_core::RegistrationRecord;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Duplicate-checked, append-only registration store.
///
/// All operations that touch the file run under one async mutex, so the
/// scan-then-append in [`append_if_unique`](Self::append_if_unique) is atomic
/// with respect to every other registration in this process. Share it
/// through an `Arc`.
pub struct RegistrationLedger {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RegistrationLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger with its header row if no file exists yet.
    ///
    /// Existing content is never truncated; calling this repeatedly is a no-op.
    pub async fn ensure_initialized(&self) -> LedgerResult<()> {
        let _guard = self.lock.lock().await;
        self.initialize_locked().await
    }

    /// Append a record unless `username` or `email` is already registered.
    pub async fn append_if_unique(
        &self,
        username: &str,
        email: &str,
    ) -> LedgerResult<RegistrationRecord> {
        let _guard = self.lock.lock().await;
        self.initialize_locked().await?;

        let content = self.read_locked().await?;
        let scan = self.parse_records(&content).await?;

        if scan.records.iter().any(|r| r.collides_with(username, email)) {
            debug!("Ledger rejected duplicate registration for '{}'", username);
            return Err(LedgerError::duplicate());
        }

        let kept = match scan.torn_at {
            Some(offset) => {
                self.truncate_locked(offset).await?;
                content.get(..offset as usize).unwrap_or_default()
            }
            None => content.as_str(),
        };

        let record = RegistrationRecord::new(username, email);

        let mut bytes = Vec::new();
        if kept.is_empty() {
            bytes.extend(self.encode(&HEADER).await?);
        } else if !kept.ends_with('\n') {
            // Previous row is complete but lost its newline
            bytes.push(b'\n');
        }
        bytes.extend(
            self.encode(&[
                record.formatted_timestamp().as_str(),
                record.username.as_str(),
                record.email.as_str(),
            ])
            .await?,
        );

        self.append_durably(&bytes).await?;

        debug!(
            "Ledger appended '{}' ({} records total)",
            record.username,
            scan.records.len() + 1
        );

        Ok(record)
    }

    /// Read every record currently in the ledger.
    ///
    /// Returns an empty list if the ledger has not been created yet.
    pub async fn records(&self) -> LedgerResult<Vec<RegistrationRecord>> {
        let _guard = self.lock.lock().await;

        match fs::try_exists(&self.path).await {
            Ok(false) => return Ok(Vec::new()),
            Ok(true) => {}
            Err(e) => return Err(LedgerError::storage(&self.path, e)),
        }

        let content = self.read_locked().await?;
        Ok(self.parse_records(&content).await?.records)
    }

    async fn initialize_locked(&self) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| LedgerError::storage(parent, e))?;
        }

        let header = self.encode(&HEADER).await?;

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(mut file) => {
                file.write_all(&header)
                    .await
                    .map_err(|e| LedgerError::storage(&self.path, e))?;
                file.sync_all()
                    .await
                    .map_err(|e| LedgerError::storage(&self.path, e))?;
                info!("Created registration ledger at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                let metadata = fs::metadata(&self.path)
                    .await
                    .map_err(|e| LedgerError::storage(&self.path, e))?;

                // An empty file (e.g. created by hand) only needs its header
                if metadata.len() == 0 {
                    self.append_durably(&header).await?;
                    info!("Wrote header to empty ledger {}", self.path.display());
                }
                Ok(())
            }
            Err(e) => Err(LedgerError::storage(&self.path, e)),
        }
    }

    async fn read_locked(&self) -> LedgerResult<String> {
        fs::read_to_string(&self.path)
            .await
            .map_err(|e| LedgerError::storage(&self.path, e))
    }

    async fn append_durably(&self, bytes: &[u8]) -> LedgerResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| LedgerError::storage(&self.path, e))?;

        file.write_all(bytes)
            .await
            .map_err(|e| LedgerError::storage(&self.path, e))?;
        file.flush()
            .await
            .map_err(|e| LedgerError::storage(&self.path, e))?;
        file.sync_data()
            .await
            .map_err(|e| LedgerError::storage(&self.path, e))?;

        Ok(())
    }

    /// Cut the file back to `offset`, dropping a torn trailing row
    async fn truncate_locked(&self, offset: u64) -> LedgerResult<()> {
        let file = OpenOptions::new()
            .write(true)
            .open(&self.path)
            .await
            .map_err(|e| LedgerError::storage(&self.path, e))?;

        file.set_len(offset)
            .await
            .map_err(|e| LedgerError::storage(&self.path, e))?;
        file.sync_all()
            .await
            .map_err(|e| LedgerError::storage(&self.path, e))?;

        warn!(
            "Truncated torn row from ledger {} at byte {}",
            self.path.display(),
            offset
        );
        Ok(())
    }

    async fn encode<S: AsRef<str>>(&self, fields: &[S]) -> LedgerResult<Vec<u8>> {
        encode_row(fields)
            .await
            .map_err(|e| LedgerError::storage(&self.path, e))
    }

    async fn parse_records(&self, content: &str) -> LedgerResult<Scan> {
        let mut rows = parse_rows(content)
            .await
            .map_err(|e| LedgerError::corrupt(&self.path, e.line, e.message))?;

        // A final row without its newline may have been cut short by a crash
        let mut torn_at = None;
        if !content.ends_with('\n')
            && let Some(last) = rows.last()
        {
            let torn = if rows.len() == 1 {
                content
                    .get(last.byte as usize..)
                    .is_some_and(|tail| HEADER_LINE.starts_with(tail))
                    && !is_header(last)
            } else {
                self.to_record(last).is_err()
            };

            if torn {
                warn!(
                    "Ignoring torn row at line {} of ledger {}",
                    last.line,
                    self.path.display()
                );
                torn_at = Some(last.byte);
                rows.pop();
            }
        }

        let mut rows = rows.into_iter();

        match rows.next() {
            Some(header) => {
                if !is_header(&header) {
                    return Err(LedgerError::corrupt(
                        &self.path,
                        header.line,
                        format!("expected header {:?}, found {:?}", HEADER, header.fields),
                    ));
                }
            }
            None => {
                return Ok(Scan {
                    records: Vec::new(),
                    torn_at,
                });
            }
        }

        let records = rows
            .map(|row| self.to_record(&row))
            .collect::<LedgerResult<Vec<_>>>()?;

        Ok(Scan { records, torn_at })
    }

    fn to_record(&self, row: &Row) -> LedgerResult<RegistrationRecord> {
        let [timestamp, username, email] = row.fields.as_slice() else {
            return Err(LedgerError::corrupt(
                &self.path,
                row.line,
                format!(
                    "expected {} fields, found {}",
                    HEADER.len(),
                    row.fields.len()
                ),
            ));
        };

        let timestamp = RegistrationRecord::parse_timestamp(timestamp)
            .map_err(|e| LedgerError::corrupt(&self.path, row.line, e.to_string()))?;

        Ok(RegistrationRecord {
            timestamp,
            username: username.clone(),
            email: email.clone(),
        })
    }
}

/// Records read from the ledger
struct Scan {
    records: Vec<RegistrationRecord>,
    /// Start of a torn trailing row, excluded from `records`
    torn_at: Option<u64>,
}

const HEADER_LINE: &str = "Timestamp,Username,Email";

fn is_header(row: &Row) -> bool {
    row.fields.len() == HEADER.len()
        && row
            .fields
            .iter()
            .zip(HEADER)
            .all(|(actual, expected)| actual.trim() == expected)
}
