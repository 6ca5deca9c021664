use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user's postal address - matches SQL schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    /// Owning user
    pub user_id: Uuid,
    /// Row identifier, assigned by the database
    pub id: i32,
    /// CEP postal code, digits only
    pub cep: i32,
    /// Two-letter state abbreviation (UF)
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub road: Option<String>,
    /// House/building number, free-form
    pub number: Option<String>,
    /// Whether the address is visible to other users
    pub public: bool,
}

/// Address data staged for insertion alongside a new user.
///
/// State, city, neighborhood and road come from the CEP lookup; the
/// number and visibility come from the registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub cep: i32,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub road: Option<String>,
    pub number: Option<String>,
    pub public: bool,
}

impl NewAddress {
    /// Combine a resolved CEP lookup with the user-supplied fields.
    pub fn from_lookup(resolved: CepAddress, number: Option<String>, public: bool) -> Self {
        Self {
            cep: resolved.cep_digits(),
            state: resolved.state,
            city: resolved.city,
            neighborhood: resolved.neighborhood,
            road: if resolved.road.is_empty() {
                None
            } else {
                Some(resolved.road)
            },
            number,
            public,
        }
    }
}

/// Address record as returned by the ViaCEP service.
///
/// ViaCEP uses Portuguese field names; empty strings stand in for
/// missing data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CepAddress {
    /// Formatted CEP, e.g. "01001-000"
    #[serde(default)]
    pub cep: String,
    #[serde(rename = "uf", default)]
    pub state: String,
    #[serde(rename = "localidade", default)]
    pub city: String,
    #[serde(rename = "bairro", default)]
    pub neighborhood: String,
    #[serde(rename = "logradouro", default)]
    pub road: String,
}

impl CepAddress {
    /// The CEP as a plain number, stripping the "01001-000" formatting.
    pub fn cep_digits(&self) -> i32 {
        self.cep
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cep_digits_strips_formatting() {
        let resolved = CepAddress {
            cep: "01001-000".to_string(),
            ..Default::default()
        };
        assert_eq!(resolved.cep_digits(), 1001000);
    }

    #[test]
    fn test_from_lookup_maps_empty_road_to_none() {
        let resolved = CepAddress {
            cep: "01001-000".to_string(),
            state: "SP".to_string(),
            city: "São Paulo".to_string(),
            neighborhood: "Sé".to_string(),
            road: String::new(),
        };

        let new_address = NewAddress::from_lookup(resolved, Some("42".to_string()), true);
        assert_eq!(new_address.road, None);
        assert_eq!(new_address.number.as_deref(), Some("42"));
        assert_eq!(new_address.state, "SP");
    }
}
