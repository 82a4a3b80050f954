use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "crosssell", about = "Cross-sell opportunity matrix for the sales-operations CRM")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full matrix with optional filters
    Matrix {
        #[arg(long)]
        client_id: Option<String>,
        /// Client industry (exact, case-sensitive)
        #[arg(long)]
        industry: Option<String>,
        /// Client region (exact, case-sensitive)
        #[arg(long)]
        region: Option<String>,
        /// Business unit the client currently belongs to
        #[arg(long)]
        source_bu: Option<String>,
        /// Business unit to cross-sell into
        #[arg(long)]
        target_bu: Option<String>,
        /// Minimum opportunity score (0-100)
        #[arg(long)]
        min_score: Option<String>,
        /// Keep only the top N items
        #[arg(long)]
        limit: Option<String>,
    },
    /// Items at or above a score threshold
    High {
        /// Threshold (default: CROSSSELL_HIGH_OPPORTUNITY_MIN or 70)
        #[arg(long)]
        min_score: Option<String>,
    },
    /// Matrix for one client
    Client { id: String },
    /// Matrix for clients whose primary business unit is the given one
    SourceBu { id: String },
    /// Matrix of pairings targeting the given business unit
    TargetBu { id: String },
    /// Matrix for one client industry
    Industry { name: String },
    /// Matrix for one client region
    Region { name: String },
    /// Per-business-unit roll-up of the matrix
    Summary,
    /// Score breakdown for one client and target business unit
    Explain {
        client_id: String,
        target_bu: String,
    },
    /// Load a JSON dataset (businessUnits, clients, services, opportunities)
    Import {
        /// Path to the dataset file
        path: String,
    },
    /// Serve the HTTP API
    Serve {
        /// Bind address (default: CROSSSELL_BIND or 127.0.0.1:8080)
        #[arg(long)]
        bind: Option<String>,
    },
}
