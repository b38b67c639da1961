use log::{debug, trace};

use crate::date::cmp_times;
use crate::query::Criteria;
use crate::trains::Train;

/// Keeps trains going from `from` to `to`. Both ends have to match.
pub fn filter_trains(trains: Vec<Train>, from: i64, to: i64) -> Vec<Train> {
    trains
        .into_iter()
        .filter(|train| {
            let matches = train.departure_station_id == from && train.arrival_station_id == to;
            if !matches {
                trace!("Skipping train {}", train.train_id);
            }
            matches
        })
        .collect()
}

/// Sorts ascending by `criteria`. The sort is stable so trains with equal
/// keys stay in dataset order. Trains with an unknown time go last.
pub fn sort_trains(trains: &mut [Train], criteria: Criteria) {
    debug!("Sorting by {}", criteria);

    match criteria {
        Criteria::Price => trains.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Criteria::DepartureTime => {
            trains.sort_by(|a, b| cmp_times(&a.departure_time, &b.departure_time))
        }
        Criteria::ArrivalTime => trains.sort_by(|a, b| cmp_times(&a.arrival_time, &b.arrival_time)),
    }
}

pub fn take_top(mut trains: Vec<Train>, n: usize) -> Vec<Train> {
    trains.truncate(n);
    trains
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trains::parse_trains;

    fn trains() -> Vec<Train> {
        parse_trains(include_str!("test_resources/trains.json")).unwrap()
    }

    fn ids(trains: &[Train]) -> Vec<i64> {
        trains.iter().map(|train| train.train_id).collect()
    }

    #[test]
    fn test_filter_trains_needs_both_stations() {
        assert_eq!(
            ids(&filter_trains(trains(), 1902, 1929)),
            vec![1177, 1386, 978, 2201, 1178, 1316, 1141]
        );
        assert_eq!(ids(&filter_trains(trains(), 1929, 1902)), vec![1021]);
        assert_eq!(ids(&filter_trains(trains(), 1902, 1909)), Vec::<i64>::new());
    }

    #[test]
    fn test_sort_trains_by_price_is_stable() {
        let mut trains = filter_trains(trains(), 1902, 1929);
        sort_trains(&mut trains, Criteria::Price);

        assert_eq!(ids(&trains), vec![1177, 1178, 1141, 1316, 1386, 978, 2201]);
    }

    #[test]
    fn test_sort_trains_by_times() {
        let mut trains = filter_trains(trains(), 1902, 1929);

        sort_trains(&mut trains, Criteria::ArrivalTime);
        assert_eq!(ids(&trains), vec![978, 1316, 2201, 1386, 1177, 1178, 1141]);

        sort_trains(&mut trains, Criteria::DepartureTime);
        assert_eq!(ids(&trains), vec![1386, 978, 1316, 2201, 1177, 1178, 1141]);
    }

    #[test]
    fn test_sort_trains_unknown_times_go_last() {
        let mut trains = filter_trains(trains(), 1937, 1909);

        // 3003 has no times at all and 3004 no arrival time
        sort_trains(&mut trains, Criteria::DepartureTime);
        assert_eq!(ids(&trains), vec![3005, 3004, 3006, 3003]);

        sort_trains(&mut trains, Criteria::ArrivalTime);
        assert_eq!(ids(&trains), vec![3005, 3006, 3004, 3003]);
    }

    #[test]
    fn test_sort_trains_unknown_time_after_midnight() {
        let mut trains = parse_trains(
            r#"[
                {"trainId": 1, "departureTime": null},
                {"trainId": 2, "departureTime": "23:00:00"},
                {"trainId": 3, "departureTime": "00:00:00"}
            ]"#,
        )
        .unwrap();

        sort_trains(&mut trains, Criteria::DepartureTime);
        assert_eq!(ids(&trains), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_trains_with_nan_price() {
        let mut trains: Vec<Train> = (0..30)
            .map(|id| Train {
                train_id: id,
                price: if id % 3 == 0 { f32::NAN } else { (30 - id) as f32 },
                ..Train::default()
            })
            .collect();

        sort_trains(&mut trains, Criteria::Price);

        assert_eq!(trains.len(), 30);
        let prices: Vec<f32> = trains.iter().map(|train| train.price).collect();
        assert!(prices[..20].windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(prices[20..].iter().all(|price| price.is_nan()));
    }

    #[test]
    fn test_take_top() {
        assert_eq!(take_top(trains(), 3).len(), 3);
        assert_eq!(take_top(filter_trains(trains(), 1929, 1902), 3).len(), 1);
        assert!(take_top(vec![], 3).is_empty());
    }
}
