use minitrees::prelude::*;

use std::sync::Arc;


fn dataset() -> Dataset {
    let names: Arc<[String]> = vec![
        "a".to_string(), "b".to_string(), "c".to_string()
    ].into();
    [
        (["x", "x", "x"], "A"),
        (["x", "x", "y"], "A"),
        (["y", "y", "y"], "B"),
        (["y", "y", "x"], "B"),
        (["x", "y", "y"], "B"),
    ]
        .into_iter()
        .map(|(values, label)| Entry::new(names.clone(), values.to_vec(), label))
        .collect()
}


fn query(values: [&str; 3]) -> Entry {
    let names: Arc<[String]> = vec![
        "a".to_string(), "b".to_string(), "c".to_string()
    ].into();
    Entry::new(names, values.to_vec(), "?")
}


#[test]
fn even_neighbor_count_is_rejected() {
    let data = dataset();
    for k in [0, 2, 4] {
        let result = KnnBuilder::new(&data).k(k).build();
        assert!(matches!(result, Err(Error::EvenNeighbors(n)) if n == k));
    }

    for k in [1, 3, 5, 7] {
        let knn = KnnBuilder::new(&data).k(k).build().unwrap();
        assert_eq!(knn.k(), k);
    }
}


#[test]
fn empty_dataset_is_rejected() {
    let data = Dataset::new();
    let result = KnnBuilder::new(&data).build();
    assert!(matches!(result, Err(Error::EmptyDataset)));
}


#[test]
fn majority_of_nearest() {
    let data = dataset();
    let entry = query(["x", "x", "x"]);

    let predict = |k| {
        KnnBuilder::new(&data)
            .k(k)
            .build()
            .unwrap()
            .produce()
            .unwrap()
            .predict(&entry)
            .unwrap()
    };
    assert_eq!(predict(1), "A");
    assert_eq!(predict(3), "A");
    assert_eq!(predict(5), "B");
}


#[test]
fn distance_ties_keep_training_order() {
    let data = dataset();
    let knn = KnnBuilder::new(&data).k(3).build().unwrap();
    let f = knn.produce().unwrap();

    // Distances: 0, 1, 3, 2, 2.
    assert_eq!(f.nearest(&query(["x", "x", "x"])), vec!["A", "A", "B"]);
}


#[test]
fn vote_ties_go_to_the_nearest_label() {
    let names: Arc<[String]> = vec!["a".to_string()].into();
    let data = [("x", "A"), ("y", "B")]
        .into_iter()
        .map(|(value, label)| Entry::new(names.clone(), vec![value], label))
        .collect::<Dataset>();

    // `k` is larger than the dataset; both entries vote.
    let f = KnnBuilder::new(&data).k(3).build().unwrap().produce().unwrap();
    let entry = Entry::new(names.clone(), vec!["y"], "?");
    assert_eq!(f.predict(&entry).unwrap(), "B");
    let entry = Entry::new(names, vec!["x"], "?");
    assert_eq!(f.predict(&entry).unwrap(), "A");
}
