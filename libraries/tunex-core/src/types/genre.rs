//! Genre types

use super::ids::GenreId;
use serde::{Deserialize, Serialize};

/// A music genre from the fixed lookup set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub created_at: String,
}
