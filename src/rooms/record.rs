use crate::grid::CellValue;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

pub const KEY_ROOM_ID: &str = "Room ID";
pub const KEY_ID: &str = "ID";
pub const KEY_NAME: &str = "Name";
pub const KEY_TIER_ID: &str = "Tier_ID";
pub const KEY_TIER: &str = "Tier";

/// Metadata keys, in output order.
pub const METADATA_KEYS: [&str; 5] = [KEY_ROOM_ID, KEY_ID, KEY_NAME, KEY_TIER_ID, KEY_TIER];

/// Value of one attribute for one tier, plus the tier-independent report flag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(rename = "Value")]
    pub value: CellValue,
    #[serde(rename = "Report")]
    pub report: CellValue,
}

/// One flattened (room, tier) entity.
///
/// Serializes as a single JSON object: the five metadata fields followed by
/// one `{"Value", "Report"}` object per attribute, in first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomRecord {
    pub room_id: CellValue,
    pub id: CellValue,
    pub name: CellValue,
    pub tier_id: usize,
    pub tier: CellValue,
    pub attributes: IndexMap<String, Attribute>,
}

impl RoomRecord {
    pub fn new(room_id: CellValue, id: CellValue, name: CellValue, tier_id: usize, tier: CellValue) -> Self {
        RoomRecord {
            room_id,
            id,
            name,
            tier_id,
            tier,
            attributes: IndexMap::new(),
        }
    }

    /// Stores an attribute; a repeated name keeps its first position and takes the latest content.
    pub fn insert(&mut self, name: String, attribute: Attribute) -> Option<Attribute> {
        self.attributes.insert(name, attribute)
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Output fields in order, with attributes named like a metadata key replacing it in place.
    fn fields(&self) -> IndexMap<&str, Field<'_>> {
        let mut fields = IndexMap::<&str, Field<'_>>::with_capacity(METADATA_KEYS.len() + self.attributes.len());
        fields.insert(KEY_ROOM_ID, Field::Cell(&self.room_id));
        fields.insert(KEY_ID, Field::Cell(&self.id));
        fields.insert(KEY_NAME, Field::Cell(&self.name));
        fields.insert(KEY_TIER_ID, Field::TierId(self.tier_id));
        fields.insert(KEY_TIER, Field::Cell(&self.tier));
        for (name, attribute) in &self.attributes {
            fields.insert(name.as_str(), Field::Attribute(attribute));
        }
        fields
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Field<'a> {
    Cell(&'a CellValue),
    TierId(usize),
    Attribute(&'a Attribute),
}

impl Serialize for RoomRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, field) in &fields {
            map.serialize_entry(key, field)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foyer() -> RoomRecord {
        RoomRecord::new("R1".into(), "A1".into(), "Foyer".into(), 1, "Basic".into())
    }

    #[test]
    fn metadata_only() {
        let json = serde_json::to_string(&foyer()).unwrap();
        assert_eq!(json, r#"{"Room ID":"R1","ID":"A1","Name":"Foyer","Tier_ID":1,"Tier":"Basic"}"#);
    }

    #[test]
    fn attributes_follow_metadata() {
        let mut record = foyer();
        record.insert("Area".to_owned(), Attribute { value: 12.0.into(), report: "visible".into() });
        record.insert("Finish".to_owned(), Attribute { value: "".into(), report: CellValue::Empty });
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"Room ID":"R1","ID":"A1","Name":"Foyer","Tier_ID":1,"Tier":"Basic","#,
                r#""Area":{"Value":12,"Report":"visible"},"#,
                r#""Finish":{"Value":"","Report":null}}"#
            )
        );
    }

    #[test]
    fn duplicate_attribute_keeps_first_position() {
        let mut record = foyer();
        record.insert("Area".to_owned(), Attribute { value: 12.0.into(), report: "a".into() });
        record.insert("Height".to_owned(), Attribute { value: 3.0.into(), report: "b".into() });
        let previous = record.insert("Area".to_owned(), Attribute { value: 14.0.into(), report: "c".into() });

        assert_eq!(previous.map(|attribute| attribute.value), Some(CellValue::Number(12.0)));
        assert_eq!(record.attributes.keys().collect::<Vec<_>>(), vec!["Area", "Height"]);
        assert_eq!(record.attribute("Area").unwrap().report, CellValue::from("c"));
    }

    #[test]
    fn attribute_named_like_metadata_replaces_it() {
        let mut record = foyer();
        record.insert("Name".to_owned(), Attribute { value: "Entry".into(), report: CellValue::Empty });
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"Room ID":"R1","ID":"A1","Name":{"Value":"Entry","Report":null},"Tier_ID":1,"Tier":"Basic"}"#
        );
    }
}
