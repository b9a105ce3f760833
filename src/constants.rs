// src/constants.rs
//! Domain constants that define the operational boundaries of the relay.

// ---------------------------------------------------------------------------
// Upstream (Notion API) contract
// ---------------------------------------------------------------------------

/// Base URL of the Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Value of the `Notion-Version` header sent on every upstream request.
///
/// Pinned to the version that still exposes `databases/{id}/query`; newer
/// versions move querying to `data_sources/{id}/query`.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Environment variable holding the integration token.
pub const NOTION_TOKEN_ENV: &str = "NOTION_TOKEN";

// ---------------------------------------------------------------------------
// Local HTTP surface
// ---------------------------------------------------------------------------

/// Path prefix every relay route is mounted under.
pub const RELAY_PATH_PREFIX: &str = "/api";

/// Listen address used when `HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listen port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Where the client library looks for a relay by default.
pub const DEFAULT_RELAY_BASE_URL: &str = "http://localhost:3000/api";

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Rendering of a ticked checkbox property.
pub const CHECKED_GLYPH: &str = "✓";
