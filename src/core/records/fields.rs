//! Kind-specific field sets

use super::kind::RecordKind;
use serde::{Deserialize, Serialize};

/// Declares a field set struct with serde wire names and name-based accessors.
macro_rules! record_fields {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$field_meta:meta])* $field:ident => $wire:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire)]
                pub $field: String,
            )*
        }

        impl $name {
            fn get(&self, name: &str) -> Option<&str> {
                match name {
                    $( $wire => Some(self.$field.as_str()), )*
                    _ => None,
                }
            }

            fn get_mut(&mut self, name: &str) -> Option<&mut String> {
                match name {
                    $( $wire => Some(&mut self.$field), )*
                    _ => None,
                }
            }
        }
    };
}

record_fields! {
    /// Fields of an internal parts transfer
    InternalTransferFields {
        /// `SSID` or `PSID`
        ssid_psid_type => "ssidPsidType",
        ssid_psid_value => "ssidPsidValue",
        po_number => "poNumber",
        site_name => "siteName",
        quantity => "quantity",
        part_number => "partNumber",
        description => "description",
    }
}

record_fields! {
    /// Fields of a warranty claim
    WarrantyClaimFields {
        ssid => "ssid",
        chiller_serial_number => "chillerSerialNumber",
        chiller_model => "chillerModel",
        building_name => "buildingName",
        quantity => "quantity",
        part_number => "partNumber",
        failed_serial_number => "failedSerialNumber",
        repair_serial_number => "repairSerialNumber",
        date_of_failure => "dateOfFailure",
        date_of_repair => "dateOfRepair",
    }
}

/// Tagged field set; `kind` is the discriminant on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordFields {
    InternalTransfer(InternalTransferFields),
    WarrantyClaim(WarrantyClaimFields),
}

impl RecordFields {
    /// All fields of the kind, empty
    pub fn empty(kind: RecordKind) -> Self {
        match kind {
            RecordKind::InternalTransfer => Self::InternalTransfer(Default::default()),
            RecordKind::WarrantyClaim => Self::WarrantyClaim(Default::default()),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::InternalTransfer(_) => RecordKind::InternalTransfer,
            Self::WarrantyClaim(_) => RecordKind::WarrantyClaim,
        }
    }

    /// Value of a kind-specific field by wire name
    pub fn get(&self, name: &str) -> Option<&str> {
        match self {
            Self::InternalTransfer(fields) => fields.get(name),
            Self::WarrantyClaim(fields) => fields.get(name),
        }
    }

    pub(super) fn get_mut(&mut self, name: &str) -> Option<&mut String> {
        match self {
            Self::InternalTransfer(fields) => fields.get_mut(name),
            Self::WarrantyClaim(fields) => fields.get_mut(name),
        }
    }
}
