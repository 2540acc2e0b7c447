use serde::{Deserialize, Serialize};

use super::creator::Creator;
use crate::error::{Error, Result};

/// Asset type codes fixed by the remote service's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Shirt,
    Pants,
}

impl AssetType {
    /// Numeric code used on the wire.
    pub const fn id(self) -> u32 {
        match self {
            AssetType::Image => 1,
            AssetType::Shirt => 11,
            AssetType::Pants => 12,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(AssetType::Image),
            11 => Some(AssetType::Shirt),
            12 => Some(AssetType::Pants),
            _ => None,
        }
    }

    pub const fn is_clothing(self) -> bool {
        matches!(self, AssetType::Shirt | AssetType::Pants)
    }
}

/// Generic asset record built from a successful details lookup.
///
/// `asset_type_id` keeps the raw remote code: lookups can return codes outside
/// the [`AssetType`] set and those assets are still representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub creator: Creator,
    pub name: String,
    pub description: String,
    pub asset_type_id: u32,
}

/// An asset whose type code has been validated as one of the clothing
/// subtypes (shirt, pants).
///
/// Image download is only meaningful for these, so the constructor rejects
/// every other code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClothingAsset {
    asset: Asset,
    asset_type: AssetType,
}

impl ClothingAsset {
    pub fn new(asset: Asset) -> Result<Self> {
        match AssetType::from_id(asset.asset_type_id) {
            Some(asset_type) if asset_type.is_clothing() => Ok(Self { asset, asset_type }),
            _ => Err(Error::InvalidAssetType {
                asset_type_id: asset.asset_type_id,
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.asset.id
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }
}

/// Result of an asset lookup, dispatched on the remote type code.
///
/// Callers match on the variant to decide whether clothing-specific
/// operations apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AssetDetails {
    Clothing(ClothingAsset),
    Other(Asset),
}

impl AssetDetails {
    /// Classify a looked-up asset by its remote type code.
    pub fn from_asset(asset: Asset) -> Self {
        match AssetType::from_id(asset.asset_type_id) {
            Some(asset_type) if asset_type.is_clothing() => {
                AssetDetails::Clothing(ClothingAsset { asset, asset_type })
            }
            _ => AssetDetails::Other(asset),
        }
    }

    pub fn asset(&self) -> &Asset {
        match self {
            AssetDetails::Clothing(clothing) => clothing.asset(),
            AssetDetails::Other(asset) => asset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreatorKind;

    fn asset_with_type(asset_type_id: u32) -> Asset {
        Asset {
            id: 127203169647575,
            creator: Creator {
                id: 42,
                name: "Builderman".to_string(),
                kind: CreatorKind::User,
            },
            name: "Classic Shirt".to_string(),
            description: String::new(),
            asset_type_id,
        }
    }

    #[test]
    fn asset_type_codes_round_trip() {
        assert_eq!(AssetType::Image.id(), 1);
        assert_eq!(AssetType::Shirt.id(), 11);
        assert_eq!(AssetType::Pants.id(), 12);
        for asset_type in [AssetType::Image, AssetType::Shirt, AssetType::Pants] {
            assert_eq!(AssetType::from_id(asset_type.id()), Some(asset_type));
        }
        assert_eq!(AssetType::from_id(8), None);
    }

    #[test]
    fn only_shirt_and_pants_are_clothing() {
        assert!(AssetType::Shirt.is_clothing());
        assert!(AssetType::Pants.is_clothing());
        assert!(!AssetType::Image.is_clothing());
    }

    #[test]
    fn clothing_asset_accepts_clothing_codes() {
        let shirt = ClothingAsset::new(asset_with_type(11)).unwrap();
        assert_eq!(shirt.asset_type(), AssetType::Shirt);
        assert_eq!(shirt.id(), 127203169647575);

        let pants = ClothingAsset::new(asset_with_type(12)).unwrap();
        assert_eq!(pants.asset_type(), AssetType::Pants);
    }

    #[test]
    fn clothing_asset_rejects_other_codes() {
        for code in [1, 8, 0] {
            let err = ClothingAsset::new(asset_with_type(code)).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidAssetType { asset_type_id } if asset_type_id == code
            ));
        }
    }

    #[test]
    fn lookup_result_classifies_by_type_code() {
        match AssetDetails::from_asset(asset_with_type(11)) {
            AssetDetails::Clothing(clothing) => {
                assert_eq!(clothing.asset_type(), AssetType::Shirt);
                assert_eq!(clothing.asset().asset_type_id, 11);
            }
            other => panic!("expected clothing, got {:?}", other),
        }

        match AssetDetails::from_asset(asset_with_type(1)) {
            AssetDetails::Other(asset) => assert_eq!(asset.asset_type_id, 1),
            other => panic!("expected generic asset, got {:?}", other),
        }
    }
}
