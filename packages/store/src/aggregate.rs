//! Reduction of the full response set into per-area counts.

use crate::models::{Area, ResponseDoc};

/// Count responses per area, in fixed catalog order ([`Area::ALL`]).
///
/// Catalog order is deliberate: the raw collection order is
/// store-dependent, so first-seen order would make the chart's bar order
/// change between refreshes. Areas with no responses are omitted.
pub fn count_by_area(responses: &[ResponseDoc]) -> Vec<(Area, usize)> {
    Area::ALL
        .into_iter()
        .filter_map(|area| {
            let count = responses.iter().filter(|r| r.area == area).count();
            (count > 0).then_some((area, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answers;

    fn response(area: Area) -> ResponseDoc {
        ResponseDoc {
            user_id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            area,
            answers: Answers::new(),
            submitted_at: 0,
        }
    }

    #[test]
    fn test_counts_group_by_area_and_omit_absent_areas() {
        let mut set = vec![
            response(Area::Student),
            response(Area::Student),
            response(Area::Creator),
        ];
        assert_eq!(
            count_by_area(&set),
            vec![(Area::Student, 2), (Area::Creator, 1)]
        );

        set.push(response(Area::Student));
        assert_eq!(
            count_by_area(&set),
            vec![(Area::Student, 3), (Area::Creator, 1)]
        );
    }

    #[test]
    fn test_bar_order_is_catalog_order_not_arrival_order() {
        let set = vec![
            response(Area::Freelancer),
            response(Area::Student),
            response(Area::Business),
        ];
        assert_eq!(
            count_by_area(&set),
            vec![
                (Area::Student, 1),
                (Area::Business, 1),
                (Area::Freelancer, 1),
            ]
        );
    }

    #[test]
    fn test_empty_set_produces_no_bars() {
        assert!(count_by_area(&[]).is_empty());
    }
}
