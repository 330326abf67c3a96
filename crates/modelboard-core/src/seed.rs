//! Seed records for the model library.
//!
//! A real deployment would receive records from a backend; the console takes
//! whatever collection it is given, and this module supplies the default one.

use chrono::NaiveDate;

use crate::record::{ModelRecord, ModelStatus};

/// Base for generated ids: record `i` gets id `#<SEED_ID_BASE + i>`.
pub const SEED_ID_BASE: u64 = 5_000_000;

/// Number of records the console starts with.
pub const DEFAULT_SEED_COUNT: usize = 20;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn seed_date() -> String {
    NaiveDate::from_ymd_opt(2024, 2, 29)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Generates `count` records numbered from 1.
///
/// Names cycle through `Model A`..`Model Z`; even-numbered records are
/// active and odd-numbered ones inactive.
pub fn generate_models(count: usize) -> Vec<ModelRecord> {
    let date = seed_date();
    (1..=count)
        .map(|i| {
            let letter = ALPHABET[(i - 1) % ALPHABET.len()] as char;
            ModelRecord {
                display_name: format!("Model {}", letter),
                id: format!("#{}", SEED_ID_BASE + i as u64),
                model_type: "Extraction".to_string(),
                description: format!("Description for Model {}", letter),
                created_on: date.clone(),
                last_trained_on: date.clone(),
                status: if i % 2 == 0 {
                    ModelStatus::Active
                } else {
                    ModelStatus::Inactive
                },
            }
        })
        .collect()
}
