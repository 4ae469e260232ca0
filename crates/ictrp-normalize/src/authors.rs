//! Contact author extraction.
//!
//! Registries publish contacts inconsistently: some fill first and last name
//! for one person, others cram a delimited author list into a single name
//! field. One shared affiliation applies to every extracted person.

use ictrp_model::{Organization, Person, TrialRow, columns};

/// Split a multi-author contact field on the punctuation observed in the
/// source data.
fn split_names(raw: &str) -> impl Iterator<Item = &str> {
    raw.split([';', ',', '?'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

pub fn extract_authors(row: &TrialRow) -> Option<Vec<Person>> {
    let affiliation = row.get(columns::CONTACT_AFFILIATION);
    let first = row.get(columns::CONTACT_FIRSTNAME);
    let last = row.get(columns::CONTACT_LASTNAME);

    match (first, last) {
        (Some(first), Some(last)) => {
            let person = Person::named(format!("{first} {last}"))
                .with_affiliation(affiliation.map(Organization::named));
            Some(vec![person])
        }
        (Some(names), None) | (None, Some(names)) => {
            let authors: Vec<Person> = split_names(names)
                .map(|name| {
                    Person::named(name).with_affiliation(affiliation.map(Organization::named))
                })
                .collect();
            if authors.is_empty() { None } else { Some(authors) }
        }
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_combine_into_one_person() {
        let row = TrialRow::new()
            .with(columns::CONTACT_FIRSTNAME, "Ada")
            .with(columns::CONTACT_LASTNAME, "Lovelace")
            .with(columns::CONTACT_AFFILIATION, "Analytical Engine Institute");
        let authors = extract_authors(&row).unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name, "Ada Lovelace");
        let affiliation = authors[0].affiliation.as_ref().unwrap();
        assert_eq!(affiliation[0].name, "Analytical Engine Institute");
    }

    #[test]
    fn lone_name_field_splits_on_source_punctuation() {
        let row = TrialRow::new().with(
            columns::CONTACT_FIRSTNAME,
            "Li Wei; Zhang Min?Chen Jing, Wang Fang",
        );
        let authors = extract_authors(&row).unwrap();
        let names: Vec<&str> = authors.iter().map(|person| person.name.as_str()).collect();
        assert_eq!(names, vec!["Li Wei", "Zhang Min", "Chen Jing", "Wang Fang"]);
        assert!(authors.iter().all(|person| person.affiliation.is_none()));
    }

    #[test]
    fn lastname_only_uses_the_same_splitting() {
        let row = TrialRow::new()
            .with(columns::CONTACT_LASTNAME, "Mueller; Schmidt")
            .with(columns::CONTACT_AFFILIATION, "Charite");
        let authors = extract_authors(&row).unwrap();
        assert_eq!(authors.len(), 2);
        assert!(authors.iter().all(|person| person.affiliation.is_some()));
    }

    #[test]
    fn no_name_fields_yields_absent() {
        let row = TrialRow::new().with(columns::CONTACT_AFFILIATION, "Somewhere");
        assert!(extract_authors(&row).is_none());
    }
}
