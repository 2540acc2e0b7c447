//! Remote-protocol constants.
//!
//! Everything here is dictated by the Roblox web endpoints rather than chosen
//! by this crate: header values must match what the browser-facing services
//! accept, and the numeric sale-configuration codes are undocumented remote
//! enums reproduced as opaque values.

/// Domain segment replaced by the proxy override in every outbound URL.
pub const SERVICE_DOMAIN: &str = "roblox.com";

/// Name of the session cookie carrying the credential.
pub const SECURITY_COOKIE: &str = ".ROBLOSECURITY";

/// Request header carrying the anti-forgery token on mutating calls, and the
/// response header it is read from.
pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// User-Agent sent on metadata and asset-delivery fetches.
pub const FETCH_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// User-Agent sent on token fetches and mutating calls.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:145.0) Gecko/20100101 Firefox/145.0";

/// Referer/Origin pair mimicking the creator site context.
pub const CREATE_REFERER: &str = "https://create.roblox.com/";
pub const CREATE_ORIGIN: &str = "https://create.roblox.com";

/// Extra browser headers required on the multipart upload call.
pub const UPLOAD_ACCEPT: &str = "*/*";
pub const UPLOAD_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
pub const UPLOAD_SEC_FETCH_DEST: &str = "empty";
pub const UPLOAD_SEC_FETCH_MODE: &str = "cors";
pub const UPLOAD_SEC_FETCH_SITE: &str = "same-site";

/// Placeholder expected price required in the upload creation context.
pub const UPLOAD_EXPECTED_PRICE: u32 = 10;

/// Default price (in Robux) when putting an asset on sale.
pub const DEFAULT_SALE_PRICE: u64 = 5;

// Opaque sale-configuration codes. The remote contract defines these enums;
// the full value ranges are unknown, so they stay as bare numbers.
pub const SALE_LOCATION_TYPE: u32 = 1;
pub const SALE_PUBLISHING_TYPE: u32 = 2;
pub const SALE_RESALE_RESTRICTION: u32 = 2;
pub const SALE_TARGET_TYPE: u32 = 0;
