// Single source of truth for all default values.

// --- Request ---
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 4_000;

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 4;
pub const DEFAULT_CONTEXT_BUDGET_CHARS: usize = 12_000;
pub const DEFAULT_METADATA_PATH: &str = "scad_library/metadata.jsonl";
pub const DEFAULT_CHUNKS_DIR: &str = "scad_library/chunks";
pub const DEFAULT_CHROMA_URL: &str = "http://localhost:8000";
pub const DEFAULT_CHROMA_COLLECTION: &str = "openscad_code";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

// --- Query weights ---
pub const FEATURE_QUERY_WEIGHT: f64 = 1.0;
pub const MANUFACTURING_QUERY_WEIGHT: f64 = 0.8;
pub const PROMPT_QUERY_WEIGHT: f64 = 0.6;

// --- Generation ---
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 4_000;
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_TRANSPORT_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 8_000;

// --- Repair ---
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

// --- Complexity ---
pub const DEFAULT_MODULE_WEIGHT: f64 = 1.0;
pub const DEFAULT_PRIMITIVE_WEIGHT: f64 = 1.0;
pub const DEFAULT_BOOLEAN_WEIGHT: f64 = 1.5;
pub const DEFAULT_QUICK_BELOW: f64 = 8.0;
pub const DEFAULT_HEAVY_ABOVE: f64 = 20.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
