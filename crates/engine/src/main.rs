use std::io::{self, Read, Write};

use chrono::{Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use rota_engine::model::{EmployeeAvailability, ScheduleOptions, ScheduleResult, Slot};
use rota_engine::solver::{self, ScheduleError};
use rota_engine::validator;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
enum Request {
    #[serde(rename_all = "camelCase")]
    Generate {
        employees: Vec<EmployeeAvailability>,
        shop_slots: Vec<Slot>,
        /// When present, the hour-bound check runs after assignment.
        options: Option<ScheduleOptions>,
        /// ISO date of the week's Monday; echoed back in the response.
        week_start: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Validate {
        employees: Vec<EmployeeAvailability>,
        shop_slots: Vec<Slot>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedWeek {
    #[serde(flatten)]
    result: ScheduleResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    week_start: Option<String>,
    generated_at: String,
}

#[derive(Debug, Serialize)]
struct OkResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ErrResponse {
    ok: bool,
    error: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse and normalise a `YYYY-MM-DD` week start. A date that is not a Monday
/// is accepted but logged.
fn parse_week_start(raw: &str) -> Result<String, ScheduleError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidWeekStart(raw.to_string()))?;
    if date.weekday() != Weekday::Mon {
        tracing::warn!(week_start = %date, weekday = ?date.weekday(), "week start is not a Monday");
    }
    Ok(date.format("%Y-%m-%d").to_string())
}

fn generate(
    employees: &[EmployeeAvailability],
    shop_slots: &[Slot],
    options: Option<&ScheduleOptions>,
    week_start: Option<&str>,
) -> Result<GeneratedWeek, ScheduleError> {
    let week_start = week_start.map(parse_week_start).transpose()?;
    let result = solver::generate_checked(employees, shop_slots, options)?;
    Ok(GeneratedWeek {
        result,
        week_start,
        generated_at: Utc::now().to_rfc3339(),
    })
}

fn write_ok<T: Serialize>(data: T) {
    let resp = OkResponse { ok: true, data };
    let json = serde_json::to_string(&resp).unwrap_or_else(|e| {
        format!("{{\"ok\":false,\"error\":\"serialization error: {}\"}}", e)
    });
    println!("{}", json);
    let _ = io::stdout().flush();
}

fn write_err(msg: impl std::fmt::Display) -> ! {
    let resp = ErrResponse {
        ok: false,
        error: msg.to_string(),
    };
    let json = serde_json::to_string(&resp).unwrap_or_else(|_| {
        "{\"ok\":false,\"error\":\"double serialization error\"}".to_string()
    });
    println!("{}", json);
    let _ = io::stdout().flush();
    std::process::exit(1);
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    // Logs go to stderr; stdout carries the JSON response only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        write_err(format!("Failed to read stdin: {}", e));
    }

    let request: Request = match serde_json::from_str(&input) {
        Ok(r) => r,
        Err(e) => write_err(format!("Invalid JSON input: {}", e)),
    };

    match request {
        Request::Generate {
            employees,
            shop_slots,
            options,
            week_start,
        } => match generate(&employees, &shop_slots, options.as_ref(), week_start.as_deref()) {
            Ok(week) => write_ok(week),
            Err(e) => write_err(e),
        },
        Request::Validate {
            employees,
            shop_slots,
        } => {
            let result = validator::validate(&employees, &shop_slots);
            write_ok(result);
        }
    }
}
