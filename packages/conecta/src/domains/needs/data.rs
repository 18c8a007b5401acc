//! Demo needs shown on a fresh page.

use chrono::NaiveDate;

use super::models::{HelpCategory, NeedRecord};
use crate::common::NeedId;
use crate::domains::locations::{is_masked_postal_code, PostalCode};

/// Fails the build on an impossible date.
const fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("demo need has an invalid date"),
    }
}

struct DemoNeed {
    institution: &'static str,
    category: HelpCategory,
    title: &'static str,
    description: &'static str,
    postal_code: &'static str,
    street: &'static str,
    neighborhood: &'static str,
    city: &'static str,
    state: &'static str,
    contact: &'static str,
    created_on: NaiveDate,
}

const DEMO_NEEDS: [DemoNeed; 5] = [
    DemoNeed {
        institution: "Instituto Aprender Mais",
        category: HelpCategory::Education,
        title: "Reforço escolar para crianças",
        description: "Voluntários para aulas de reforço em português e matemática aos sábados.",
        postal_code: "01310-100",
        street: "Avenida Paulista",
        neighborhood: "Bela Vista",
        city: "São Paulo",
        state: "SP",
        contact: "(11) 98765-4321",
        created_on: demo_date(2025, 3, 1),
    },
    DemoNeed {
        institution: "Associação Vida Saudável",
        category: HelpCategory::Health,
        title: "Apoio em mutirão de saúde",
        description: "Recepção e organização de filas em um dia de atendimento médico gratuito.",
        postal_code: "20040-002",
        street: "Rua da Assembleia",
        neighborhood: "Centro",
        city: "Rio de Janeiro",
        state: "RJ",
        contact: "vidasaudavel@exemplo.org",
        created_on: demo_date(2025, 3, 3),
    },
    DemoNeed {
        institution: "ONG Mar Azul",
        category: HelpCategory::Environment,
        title: "Limpeza de praia",
        description: "Recolhimento de resíduos na orla com separação para reciclagem.",
        postal_code: "40140-130",
        street: "Avenida Oceânica",
        neighborhood: "Barra",
        city: "Salvador",
        state: "BA",
        contact: "(71) 99876-5432",
        created_on: demo_date(2025, 3, 5),
    },
    DemoNeed {
        institution: "Banco de Alimentos Solidário",
        category: HelpCategory::FoodDonation,
        title: "Arrecadação de alimentos",
        description: "Triagem e montagem de cestas básicas para famílias cadastradas.",
        postal_code: "30130-010",
        street: "Avenida Afonso Pena",
        neighborhood: "Centro",
        city: "Belo Horizonte",
        state: "MG",
        contact: "doacoes@bancosolidario.org",
        created_on: demo_date(2025, 3, 8),
    },
    DemoNeed {
        institution: "Casa de Acolhimento Esperança",
        category: HelpCategory::ClothingDonation,
        title: "Campanha do agasalho",
        description: "Coleta e organização de roupas de inverno para pessoas em situação de rua.",
        postal_code: "80020-310",
        street: "Rua XV de Novembro",
        neighborhood: "Centro",
        city: "Curitiba",
        state: "PR",
        contact: "(41) 3322-1100",
        created_on: demo_date(2025, 3, 10),
    },
];

const _: () = {
    let mut i = 0;
    while i < DEMO_NEEDS.len() {
        assert!(
            is_masked_postal_code(DEMO_NEEDS[i].postal_code),
            "demo need has a malformed postal code"
        );
        i += 1;
    }
};

/// Build the demo needs with fresh ids.
pub fn demo_needs() -> Vec<NeedRecord> {
    DEMO_NEEDS
        .iter()
        .map(|demo| NeedRecord {
            id: NeedId::new(),
            institution: demo.institution.to_string(),
            category: demo.category,
            title: demo.title.to_string(),
            description: demo.description.to_string(),
            postal_code: PostalCode::from_checked(demo.postal_code),
            street: demo.street.to_string(),
            neighborhood: demo.neighborhood.to_string(),
            city: demo.city.to_string(),
            state: demo.state.to_string(),
            contact: demo.contact.to_string(),
            created_on: demo.created_on,
        })
        .collect()
}
