// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SessionConfig;

pub const FAMILY_CONFIG: &str = r#"{
    "id": "smith",
    "name": "Smith Family",
    "year": 2025,
    "budget": 50,
    "theme": "Handmade",
    "people": {
        "Alice": { "email": "alice@example.com", "partner": "Bob" },
        "Bob": { "email": "bob@example.com", "partner": "Alice" },
        "Carol": { "email": "carol@example.com", "alias": "Caz" },
        "Dave": { "email": "dave@example.com" },
        "Eve": { "email": "eve@example.com", "is_active": false }
    },
    "previous": {
        "2024": { "Alice": "Carol", "Carol": "Dave", "Dave": "Bob", "Bob": "Alice" }
    },
    "name_mapping": { "Davey": "Dave" }
}"#;

pub fn create_test_config() -> SessionConfig {
    SessionConfig::from_json_str(FAMILY_CONFIG).unwrap()
}
