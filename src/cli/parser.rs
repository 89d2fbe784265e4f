use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for kronos.
/// Workforce management backend: attendance, hours, leave and shifts over SQLite.
#[derive(Parser)]
#[command(
    name = "kronos",
    version = env!("CARGO_PKG_VERSION"),
    about = "Workforce management backend CLI: clock events, work-hours reconciliation, leave and shift requests",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Credential check stub (plaintext compare, not hardened)
    Login {
        #[arg(long = "staff-id", help = "Login code of the employee")]
        staff_id: Option<String>,

        #[arg(long, help = "Password (compared in plaintext)")]
        password: Option<String>,
    },

    /// Manage employees
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Record a clock event (IN or OUT) for an employee
    Clock {
        #[arg(long, help = "Employee id (users.id)")]
        user: Option<i64>,

        #[arg(long, help = "Clock action: 'in' or 'out' (case-insensitive)")]
        action: Option<String>,

        #[arg(long, help = "Event source tag (default from config, e.g. CLI)")]
        source: Option<String>,

        #[arg(long, help = "Raw scanned value (badge/QR), stored verbatim")]
        raw: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Backfill timestamp (UTC), e.g. '2026-01-05 09:00'; default is now"
        )]
        at: Option<String>,
    },

    /// List attendance events
    Attendance {
        #[arg(long, help = "Employee id (users.id)")]
        user: Option<i64>,

        #[arg(long, help = "Only events of the last N days (default 7)")]
        days: Option<i64>,

        #[arg(long, help = "Only events of one calendar date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Full history for the employee")]
        all: bool,

        #[arg(long, help = "HR overview: recent events across all employees")]
        recent: bool,

        #[arg(long, help = "Row limit for --recent (default 100)")]
        limit: Option<i64>,
    },

    /// Work-hours report: daily ledger plus trailing 7-day total
    Hours {
        #[arg(long, help = "Employee id (users.id)")]
        user: Option<i64>,

        #[arg(long, help = "HR-wide report for every employee with events")]
        all: bool,

        #[arg(
            long,
            help = "Total paired hours for a period instead of the daily ledger: \
                    YYYY, YYYY-MM, YYYY-MM-DD, or a range such as \"2026-01-01:2026-01-15\""
        )]
        range: Option<String>,

        #[arg(long, help = "Emit the report as JSON instead of a table")]
        json: bool,
    },

    /// Manage leave requests
    Leave {
        #[command(subcommand)]
        action: LeaveAction,
    },

    /// Manage shifts
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Manage shift trade/pick-up/drop requests
    ShiftRequest {
        #[command(subcommand)]
        action: ShiftRequestAction,
    },

    /// Export attendance events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Restrict to one employee id")]
        user: Option<i64>,

        /// Date range to export.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD, ranges such as
        /// "2026-01:2026-03", or "all" (the default).
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create an employee record
    Add {
        #[arg(long = "staff-id")]
        staff_id: String,

        #[arg(long = "first")]
        first_name: String,

        #[arg(long = "last")]
        last_name: String,

        #[arg(long)]
        password: String,

        #[arg(long, default_value_t = 1, help = "Role id: 1=staff, 2=HR")]
        role: i64,

        #[arg(long)]
        department: Option<i64>,
    },

    /// List non-HR employees (for HR dropdowns and reports)
    List,
}

#[derive(Subcommand)]
pub enum LeaveAction {
    /// Employee: submit a new leave request
    Submit {
        #[arg(long)]
        user: Option<i64>,

        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        #[arg(long, value_name = "DATE")]
        to: Option<String>,

        #[arg(long)]
        reason: Option<String>,
    },

    /// List leave requests (per employee, by status, or all)
    List {
        #[arg(long)]
        user: Option<i64>,

        #[arg(long, help = "Filter by status: PENDING, APPROVED or REJECTED")]
        status: Option<String>,
    },

    /// HR: approve / reject / reset a leave request
    SetStatus {
        #[arg(long)]
        id: i64,

        #[arg(long, help = "APPROVED, REJECTED or PENDING")]
        status: String,

        #[arg(long, help = "HR user id; required for APPROVED/REJECTED")]
        approver: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// HR: create a new shift
    Create {
        #[arg(long)]
        description: Option<String>,

        #[arg(long, help = "Assign directly to an employee id")]
        assign: Option<i64>,

        #[arg(long, help = "AVAILABLE, ASSIGNED, COMPLETED or CANCELLED")]
        status: Option<String>,

        #[arg(long = "created-by")]
        created_by: Option<i64>,
    },

    /// List shifts (per employee, available pool, or all)
    List {
        #[arg(long)]
        user: Option<i64>,

        #[arg(long, help = "Only unassigned shifts with status AVAILABLE")]
        available: bool,
    },

    /// HR: update a shift's status and assignee
    SetStatus {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        status: String,

        #[arg(long, help = "New assignee employee id")]
        assign: Option<i64>,
    },

    /// HR: delete a shift
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ShiftRequestAction {
    /// Employee: submit a shift request
    Submit {
        #[arg(long)]
        user: Option<i64>,

        #[arg(long)]
        shift: Option<i64>,

        #[arg(long = "type", help = "TRADE, PICK_UP or DROP")]
        request_type: Option<String>,

        #[arg(long)]
        note: Option<String>,

        #[arg(long, help = "ASSIGNED or AVAILABLE")]
        origin: Option<String>,
    },

    /// List shift requests (per employee or all with names)
    List {
        #[arg(long)]
        user: Option<i64>,
    },

    /// HR: approve / reject / reset a shift request
    SetStatus {
        #[arg(long)]
        id: i64,

        #[arg(long, help = "APPROVED, REJECTED or PENDING")]
        status: String,

        #[arg(long, help = "HR user id; required for APPROVED/REJECTED")]
        approver: Option<i64>,
    },
}
