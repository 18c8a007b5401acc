use serde::{Deserialize, Deserializer, Serialize};

/// Raw ViaCEP `/json/` response body.
///
/// Unknown codes come back as `200 OK` with only an `erro` flag, which the
/// service has historically sent both as a boolean and as the string `"true"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CepResponse {
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub complemento: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub localidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default, deserialize_with = "deserialize_erro")]
    pub erro: bool,
}

fn deserialize_erro<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(flag)) => flag,
        Some(Flag::Text(text)) => text.eq_ignore_ascii_case("true"),
        None => false,
    })
}

/// Address resolved for a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CepAddress {
    pub cep: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl CepResponse {
    /// Convert into an address, or `None` when ViaCEP flagged the code as unknown.
    pub fn into_address(self) -> Option<CepAddress> {
        if self.erro {
            return None;
        }

        Some(CepAddress {
            cep: self.cep.unwrap_or_default(),
            street: self.logradouro.unwrap_or_default(),
            neighborhood: self.bairro.unwrap_or_default(),
            city: self.localidade.unwrap_or_default(),
            state: self.uf.unwrap_or_default(),
        })
    }
}
