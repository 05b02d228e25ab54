// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Category;

/// Key the category picker starts on before the user selects anything.
pub const PLACEHOLDER_KEY: &str = "category";

pub static CATEGORIES: &[Category] = &[
    Category {
        key: "purchases",
        name: "Compras",
        color: "#5636D3",
    },
    Category {
        key: "food",
        name: "Alimentação",
        color: "#FF872C",
    },
    Category {
        key: "salary",
        name: "Salário",
        color: "#12A454",
    },
    Category {
        key: "car",
        name: "Carro",
        color: "#E83F5B",
    },
    Category {
        key: "leisure",
        name: "Lazer",
        color: "#26195C",
    },
    Category {
        key: "studies",
        name: "Estudos",
        color: "#9C001A",
    },
];

pub fn find(key: &str) -> Option<&'static Category> {
    let key = key.trim();
    CATEGORIES.iter().find(|c| c.key == key)
}
