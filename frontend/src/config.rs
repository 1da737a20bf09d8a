//! Deployment constants for the client.

use common::model::flight::TravelClass;

/// The collector endpoint handling both submission (POST) and retrieval (GET).
pub const DATA_ENDPOINT: &str = "https://forms.tecnoescam.dev/api/data.php";

/// Name used in the exported spreadsheet filename and sheet.
pub const ENTITY: &str = "Registration";

/// Reference sub-table searched when resolving assigned flight options.
pub const TRAVEL_CLASS: TravelClass = TravelClass::Economy;
