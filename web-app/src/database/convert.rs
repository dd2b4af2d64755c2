use shared::data::{Member, MemberId, UNNAMED};

use super::entities::member::Model;

impl From<Model> for Member {
    fn from(value: Model) -> Self {
        Self {
            id: match value.id.parse::<MemberId>() {
                Ok(id) => id,
                Err(never) => match never {},
            },
            display_name: value
                .display_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNNAMED.to_string()),
            position: Some(value.position),
            display_group: value.display_group,
            bio: value.bio,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_becomes_placeholder() {
        let member = Member::from(Model {
            id: "4".into(),
            display_name: Some(String::new()),
            position: "Member".into(),
            display_group: String::new(),
            bio: None,
            created_at: None,
        });

        assert_eq!(member.id, MemberId::Number(4));
        assert_eq!(member.display_name, UNNAMED);
        assert_eq!(member.position.as_deref(), Some("Member"));
        assert_eq!(member.display_group, "");
    }

    #[test]
    fn non_numeric_ids_stay_text() {
        let member = Member::from(Model {
            id: "6f1c2a9e-6d0b-4c1e-9b8f-2f3d4e5a6b7c".into(),
            display_name: Some("Robin".into()),
            position: "Member".into(),
            display_group: "Pit".into(),
            bio: None,
            created_at: None,
        });

        assert_eq!(
            member.id,
            MemberId::Text("6f1c2a9e-6d0b-4c1e-9b8f-2f3d4e5a6b7c".into())
        );
        assert_eq!(
            serde_json::to_value(&member).unwrap()["id"],
            "6f1c2a9e-6d0b-4c1e-9b8f-2f3d4e5a6b7c"
        );
    }

    #[test]
    fn numeric_ids_serialize_as_numbers() {
        let member = Member::from(Model {
            id: "42".into(),
            display_name: Some("Robin".into()),
            position: "Member".into(),
            display_group: String::new(),
            bio: None,
            created_at: None,
        });

        assert_eq!(serde_json::to_value(&member).unwrap()["id"], 42);
    }
}
