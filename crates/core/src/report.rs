//! Report engine: for every relation currently alive, the destination(s)
//! tied at the maximum in-degree.

use crate::relation::RelationStore;

/// Build the deterministic report line for the current relation store.
///
/// Relations are visited in ascending lexicographic order by name; within
/// each relation, winners (destinations tied at the maximum in-degree) are
/// sorted ascending by name. Emits exactly `"none\n"` if no relation is
/// currently alive.
pub fn build_report(relations: &RelationStore) -> String {
    let mut relation_names = relations.relation_names();
    relation_names.sort();

    let mut records = Vec::with_capacity(relation_names.len());
    for relation in &relation_names {
        let degrees = relations.dest_degrees(relation);

        let mut max = 0usize;
        let mut winners: Vec<String> = Vec::new();
        for (dest, degree) in degrees {
            if degree > max {
                max = degree;
                winners.clear();
                winners.push(dest);
            } else if degree == max && degree > 0 {
                winners.push(dest);
            }
        }
        if max == 0 {
            // A relation with no arrows shouldn't be in the store at all
            // (invariant 3); skip defensively rather than emit garbage.
            continue;
        }
        winners.sort();

        let mut record = format!("\"{relation}\"");
        for winner in &winners {
            record.push_str(&format!(" \"{winner}\""));
        }
        record.push_str(&format!(" {max};"));
        records.push(record);
    }

    if records.is_empty() {
        "none\n".to_string()
    } else {
        format!("{}\n", records.join(" "))
    }
}
