use std::sync::Arc;
use std::thread;

use pennywise::{Classifier, Record, Trainer};

fn fixture_records() -> Vec<Record> {
    vec![
        Record::new("coffee at starbucks", "Food"),
        Record::new("lunch at the deli", "Food"),
        Record::new("grocery store run", "Food"),
        Record::new("pizza delivery", "Food"),
        Record::new("dinner with friends", "Food"),
        Record::new("weekly grocery shopping", "Food"),
        Record::new("burger and fries", "Food"),
        Record::new("uber to airport", "Transport"),
        Record::new("monthly train pass", "Transport"),
        Record::new("taxi ride downtown", "Transport"),
        Record::new("bus ticket", "Transport"),
        Record::new("gas station fill up", "Transport"),
        Record::new("parking garage fee", "Transport"),
        Record::new("uber ride home", "Transport"),
        Record::new("electricity bill", "Utilities"),
        Record::new("monthly water bill", "Utilities"),
        Record::new("internet service payment", "Utilities"),
        Record::new("phone bill payment", "Utilities"),
        Record::new("gas heating bill", "Utilities"),
        Record::new("electricity usage charge", "Utilities"),
    ]
}

fn setup_test_classifier() -> Classifier {
    Trainer::new()
        .fit(&fixture_records())
        .expect("Failed to create classifier")
}

#[test]
fn test_end_to_end_classification() -> Result<(), Box<dyn std::error::Error>> {
    let classifier = setup_test_classifier();

    assert_eq!(classifier.predict("starbucks coffee")?, "Food");
    assert_eq!(classifier.predict("uber to the airport")?, "Transport");
    assert_eq!(classifier.predict("paying the electricity bill")?, "Utilities");
    Ok(())
}

#[test]
fn test_training_messages_classify_as_their_own_label() {
    let classifier = setup_test_classifier();

    // Not a hard guarantee for Naive Bayes, but on this separable fixture
    // any miss is a regression.
    let mut correct = 0;
    let records = fixture_records();
    for record in &records {
        if classifier.predict(&record.message).unwrap() == record.category {
            correct += 1;
        }
    }
    assert!(
        correct >= records.len() - 1,
        "Expected at least {} of {} training rows to classify correctly, got {}",
        records.len() - 1,
        records.len(),
        correct
    );
}

#[test]
fn test_empty_message_gets_a_valid_label() {
    let classifier = setup_test_classifier();

    let label = classifier.predict("").unwrap();
    assert!(classifier.info().class_labels.contains(&label));
}

#[test]
fn test_fully_out_of_vocabulary_message_gets_a_valid_label() {
    let classifier = setup_test_classifier();

    let label = classifier.predict("xylophone quarterly zeppelin").unwrap();
    assert!(classifier.info().class_labels.contains(&label));
}

#[test]
fn test_retraining_is_idempotent() {
    let first = setup_test_classifier();
    let second = setup_test_classifier();

    let held_out = [
        "coffee and a sandwich",
        "train to the city",
        "water and electricity",
        "completely unrelated words",
        "",
    ];
    for message in held_out {
        assert_eq!(
            first.predict(message).unwrap(),
            second.predict(message).unwrap(),
            "Retraining on an unchanged dataset changed the prediction for '{}'",
            message
        );
    }
}

#[test]
fn test_labels_are_the_training_categories() {
    let classifier = setup_test_classifier();
    let info = classifier.info();

    assert_eq!(info.num_classes, 3);
    assert_eq!(
        info.class_labels,
        vec![
            "Food".to_string(),
            "Transport".to_string(),
            "Utilities".to_string()
        ]
    );
}

#[test]
fn test_thread_safety() {
    let classifier = Arc::new(setup_test_classifier());
    let mut handles = vec![];

    for _ in 0..3 {
        let classifier = Arc::clone(&classifier);
        let handle = thread::spawn(move || {
            let result = classifier.predict("coffee at starbucks");
            assert!(result.is_ok());
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
