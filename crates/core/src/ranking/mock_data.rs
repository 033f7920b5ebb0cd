//! Demo data used to seed local backends.
//!
//! Pure functions with fixed IDs, so the in-memory server and the DynamoDB
//! seed task produce the same rank table.

use super::types::{Attribute, Entry, Rank, Scores};

const DEMO_RANK_ID: &str = "1ac85e34-cb6f-40c9-97bb-16267877bb13";

/// The "Video Game Consoles" demo rank.
pub fn demo_rank() -> Rank {
    Rank::new("Video Game Consoles", true).with_id(DEMO_RANK_ID)
}

/// The three scoring attributes of the demo rank, in display order.
pub fn demo_attributes() -> Vec<Attribute> {
    [
        (
            "be44503b-1fac-4d5a-aae0-0239159bdc4a",
            "Controls",
            "Evaluate the quality and accessibility of controls",
            1,
        ),
        (
            "53e1515d-7fed-4d94-8b36-4cd49b2f11be",
            "Graphics",
            "Evaluate the graphics capacity of the console",
            2,
        ),
        (
            "b2ac5f2c-a65c-4eb8-a0e1-a66a6bea4aac",
            "Sound",
            "Evaluate the sound capacity of the console",
            3,
        ),
    ]
    .into_iter()
    .map(|(id, name, description, order)| {
        Attribute::new(name, description, order, DEMO_RANK_ID).with_id(id)
    })
    .collect()
}

/// The five demo entries, scored against the demo attributes.
pub fn demo_entries() -> Vec<Entry> {
    [
        (
            "d10961ca-e9ed-4d3b-b086-f756a3118894",
            "Neo Geo CD",
            "https://videogame.com/neo-geo-cd.png",
            [90, 97, 97],
        ),
        (
            "e006f3be-88a4-4891-8c8e-f1de6d6b5324",
            "Nintendo Entertainment System",
            "https://videogame.com/nes.png",
            [70, 72, 70],
        ),
        (
            "da2b4fc6-f933-4214-b742-4f199aec2481",
            "Sega Master System",
            "https://videogame.com/sms.png",
            [73, 78, 76],
        ),
        (
            "25658fa3-6721-42ae-8e25-7ba9c8f1cd85",
            "Sega Mega Drive",
            "https://videogame.com/smd.png",
            [80, 84, 83],
        ),
        (
            "959c559e-db6a-4c4a-9164-f3eab305e076",
            "Super Nintendo Entertainment System",
            "https://videogame.com/snes.png",
            [84, 89, 87],
        ),
    ]
    .into_iter()
    .map(|(id, name, image_url, [controls, graphics, sound])| {
        let scores = Scores::from([
            ("Controls".to_string(), controls),
            ("Graphics".to_string(), graphics),
            ("Sound".to_string(), sound),
        ]);
        Entry::new(name, image_url, scores, DEMO_RANK_ID).with_id(id)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{validate_attribute, validate_entry, validate_rank, Validator};

    #[test]
    fn test_demo_data_is_valid() {
        let mut v = Validator::new();
        validate_rank(&mut v, &demo_rank());
        for attribute in demo_attributes() {
            validate_attribute(&mut v, &attribute);
        }
        for entry in demo_entries() {
            validate_entry(&mut v, &entry);
        }
        assert!(v.valid(), "demo data invalid: {}", v.errors());
    }

    #[test]
    fn test_demo_children_belong_to_demo_rank() {
        let rank = demo_rank();
        assert_eq!(demo_attributes().len(), 3);
        assert_eq!(demo_entries().len(), 5);
        assert!(demo_attributes().iter().all(|a| a.rank_id == rank.id));
        assert!(demo_entries().iter().all(|e| e.rank_id == rank.id));
    }

    #[test]
    fn test_demo_entry_scores() {
        let entries = demo_entries();
        let snes = entries
            .iter()
            .find(|e| e.name == "Super Nintendo Entertainment System")
            .unwrap();
        assert_eq!(snes.scores.get("Graphics"), Some(&89));
        assert_eq!(snes.scores.len(), 3);
    }
}
