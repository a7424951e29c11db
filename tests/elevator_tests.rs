//! Elevator scheduling validation tests
//!
//! Exercises the public elevator API the way a driver would.

use elevator_sim::simulation::{Door, Elevator, Movement, LOAD_LIMIT};

fn elevator_at(first: i32, last: i32, start: i32) -> Elevator {
    let mut elevator = Elevator::new(1);
    elevator.setup(first, last);
    if start != first {
        assert!(elevator.push_button(start));
        assert!(elevator.process_next_request());
    }
    elevator
}

#[test]
fn test_setup_floor_counts() {
    for (first, last) in [(0, 0), (0, 12), (-5, 12), (-10, -3)] {
        let mut elevator = Elevator::new(1);
        elevator.setup(first, last);

        assert_eq!(elevator.floor_count(), (last - first + 1) as usize);
        assert_eq!(elevator.current_floor(), Some(first));
        assert_eq!(elevator.bottom_floor(), Some(first));
        assert_eq!(elevator.top_floor(), Some(last));
        assert!(elevator
            .floors()
            .windows(2)
            .all(|pair| pair[0].number < pair[1].number));
    }
}

#[test]
fn test_setup_reversed_range_leaves_no_floors() {
    let mut elevator = Elevator::new(1);
    elevator.setup(10, 5);

    assert_eq!(elevator.floor_count(), 0);
    assert_eq!(elevator.bottom_floor(), None);
    assert_eq!(elevator.top_floor(), None);
    assert!(!elevator.push_button(7));
}

#[test]
fn test_push_button_rejections() {
    let mut elevator = Elevator::new(1);
    elevator.setup(1, 10);

    assert!(!elevator.push_button(1)); // current floor
    assert!(!elevator.push_button(15));
    assert!(!elevator.push_button(0));
    assert_eq!(elevator.movement(), Movement::Idle);
}

#[test]
fn test_push_button_sets_direction_when_idle() {
    let mut elevator = elevator_at(0, 10, 0);
    assert!(elevator.push_button(5));
    assert_eq!(elevator.movement(), Movement::Up);
    assert_eq!(elevator.pending_up(), vec![5]);
}

#[test]
fn test_process_fails_when_idle() {
    let mut elevator = Elevator::new(1);
    elevator.setup(0, 10);
    assert!(!elevator.process_next_request());
    assert_eq!(elevator.current_floor(), Some(0));
}

#[test]
fn test_process_fails_during_emergency() {
    let mut elevator = Elevator::new(1);
    elevator.setup(1, 10);
    elevator.push_button(5);
    elevator.push_emergency(true);

    assert!(!elevator.process_next_request());
    assert_eq!(elevator.current_floor(), Some(1));
    assert_eq!(elevator.pending_up(), vec![5]);
}

#[test]
fn test_process_fails_when_overloaded() {
    let mut elevator = Elevator::new(1);
    elevator.setup(1, 10);
    elevator.push_button(5);
    elevator.enter(LOAD_LIMIT + 1);

    assert!(!elevator.process_next_request());
    assert_eq!(elevator.current_floor(), Some(1));
}

#[test]
fn test_up_visits_nearest_stop_first() {
    let mut elevator = elevator_at(1, 12, 1);
    for floor in [3, 7, 5] {
        assert!(elevator.push_button(floor));
    }

    let mut visited = Vec::new();
    while elevator.process_next_request() {
        visited.push(elevator.current_floor().unwrap());
    }
    assert_eq!(visited, vec![3, 5, 7]);
    assert_eq!(elevator.movement(), Movement::Up);
}

#[test]
fn test_push_order_does_not_matter() {
    for order in [[9, 2, 6], [2, 6, 9], [6, 9, 2]] {
        let mut elevator = elevator_at(0, 10, 0);
        for floor in order {
            elevator.push_button(floor);
        }
        assert!(elevator.process_next_request());
        assert_eq!(elevator.current_floor(), Some(2));
        assert!(elevator.process_next_request());
        assert_eq!(elevator.current_floor(), Some(6));
        assert!(elevator.process_next_request());
        assert_eq!(elevator.current_floor(), Some(9));
    }
}

#[test]
fn test_empty_queue_keeps_direction() {
    let mut elevator = elevator_at(0, 10, 0);
    elevator.push_button(4);
    assert!(elevator.process_next_request());

    assert!(!elevator.process_next_request());
    assert_eq!(elevator.movement(), Movement::Up);
    assert_eq!(elevator.current_floor(), Some(4));
}

#[test]
fn test_insert_floor_only_below_bottom() {
    let mut elevator = Elevator::new(1);
    elevator.setup(1, 10);

    assert!(!elevator.insert_floor(15));
    assert!(!elevator.insert_floor(1));
    assert!(!elevator.insert_floor(5));
    assert_eq!(elevator.floor_count(), 10);

    assert!(elevator.insert_floor(0));
    assert_eq!(elevator.bottom_floor(), Some(0));
    assert_eq!(elevator.current_floor(), Some(0));
    assert_eq!(elevator.floor_count(), 11);
}

#[test]
fn test_insert_floor_moves_car_to_new_bottom() {
    let mut elevator = elevator_at(0, 10, 6);
    assert!(elevator.insert_floor(-2));
    assert_eq!(elevator.current_floor(), Some(-2));
}

#[test]
fn test_insert_floor_on_empty_elevator() {
    let mut elevator = Elevator::new(1);
    assert!(elevator.insert_floor(3));
    assert_eq!(elevator.bottom_floor(), Some(3));
    assert_eq!(elevator.top_floor(), Some(3));
    assert_eq!(elevator.current_floor(), Some(3));
}

#[test]
fn test_load_accounting() {
    let mut elevator = Elevator::new(1);
    elevator.enter(5);
    assert_eq!(elevator.exit(100), 0);
    assert_eq!(elevator.load(), 0);

    elevator.enter(LOAD_LIMIT + 500);
    assert_eq!(elevator.load(), LOAD_LIMIT + 500);
}

#[test]
fn test_single_elevator_scenario() {
    let mut elevator = Elevator::new(10);
    elevator.setup(0, 12);
    assert!(elevator.push_button(8));
    assert_eq!(elevator.movement(), Movement::Up);

    assert!(elevator.process_next_request());
    assert_eq!(elevator.current_floor(), Some(8));
    assert_eq!(elevator.door(), Door::Open);

    let dump = elevator.to_string();
    assert!(dump.starts_with("Elevator 10 is moving up.\n"));
    assert!(dump.contains("8 current \n"));
}
