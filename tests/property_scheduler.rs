use std::collections::HashSet;

use petgraph::algo::is_cyclic_directed;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;
use proptest::prelude::*;

use courseplan::errors::ScheduleError;
use courseplan::input::CourseCatalog;
use courseplan::schedule::CourseScheduler;
use courseplan_test_utils::builders::CatalogBuilder;
use courseplan_test_utils::position_of;

fn course_name(idx: usize) -> String {
    format!("course_{idx:02}")
}

/// Build a catalog from per-course prerequisite indices.
fn catalog_from(deps: &[Vec<usize>]) -> CourseCatalog {
    let names: Vec<String> = (0..deps.len()).map(course_name).collect();
    let mut builder = CatalogBuilder::new();
    for (i, prereqs) in deps.iter().enumerate() {
        let prereq_names: Vec<&str> = prereqs.iter().map(|&p| names[p].as_str()).collect();
        builder = builder.with_course(&names[i], &prereq_names);
    }
    builder.build()
}

/// Same edges as a petgraph map, used as an independent oracle.
fn oracle_graph(catalog: &CourseCatalog) -> DiGraphMap<&str, ()> {
    let mut graph = DiGraphMap::new();
    for record in catalog.records() {
        graph.add_node(record.name.as_str());
    }
    for record in catalog.records() {
        for prereq in record.prerequisites.iter() {
            graph.add_edge(record.name.as_str(), prereq.as_str(), ());
        }
    }
    graph
}

// Acyclic by construction: course N may only depend on courses 0..N-1.
fn acyclic_deps_strategy(max_courses: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=max_courses).prop_flat_map(|num_courses| {
        proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_courses),
            num_courses,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, potential)| {
                    let mut seen = HashSet::new();
                    potential
                        .into_iter()
                        .filter(|_| i > 0)
                        .map(|p| p % i.max(1))
                        .filter(|p| seen.insert(*p))
                        .collect::<Vec<usize>>()
                })
                .collect::<Vec<Vec<usize>>>()
        })
    })
}

// Unconstrained edges; may or may not contain cycles.
fn any_deps_strategy(max_courses: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=max_courses).prop_flat_map(|num_courses| {
        proptest::collection::vec(
            proptest::collection::vec(0..num_courses, 0..3),
            num_courses,
        )
    })
}

proptest! {
    #[test]
    fn acyclic_order_is_a_valid_permutation(deps in acyclic_deps_strategy(12)) {
        let catalog = catalog_from(&deps);
        let scheduler = CourseScheduler::from_catalog(&catalog);

        let order = scheduler.completion_order();
        prop_assert!(order.is_ok(), "acyclic graph reported {:?}", order);
        let order = order.unwrap();

        let mut sorted = order.clone();
        sorted.sort();
        prop_assert_eq!(sorted, scheduler.all_courses());

        for (course, prereq) in scheduler.graph().edges() {
            prop_assert!(
                position_of(&order, prereq) < position_of(&order, course),
                "{} must come before {}", prereq, course
            );
        }
        prop_assert!(scheduler.can_complete_all());
    }

    #[test]
    fn minimum_count_matches_reachable_prerequisites(deps in acyclic_deps_strategy(12)) {
        let catalog = catalog_from(&deps);
        let scheduler = CourseScheduler::from_catalog(&catalog);
        let oracle = oracle_graph(&catalog);

        for record in catalog.records() {
            let course = record.name.as_str();
            let mut dfs = Dfs::new(&oracle, course);
            let mut reachable = 0i64;
            while dfs.next(&oracle).is_some() {
                reachable += 1;
            }
            prop_assert_eq!(scheduler.minimum_prerequisite_count(course), reachable - 1);
        }
    }

    #[test]
    fn cycle_detection_agrees_with_oracle(deps in any_deps_strategy(8)) {
        let catalog = catalog_from(&deps);
        let scheduler = CourseScheduler::from_catalog(&catalog);
        let oracle = oracle_graph(&catalog);

        let cyclic = is_cyclic_directed(&oracle);
        prop_assert_eq!(scheduler.can_complete_all(), !cyclic);

        match scheduler.completion_order() {
            Ok(order) => {
                prop_assert_eq!(order.len(), scheduler.graph().order());
            }
            Err(ScheduleError::CycleDetected(cycle)) => {
                prop_assert!(cyclic);
                prop_assert!(cycle.len() >= 2);
                prop_assert_eq!(cycle.first(), cycle.last());
                for pair in cycle.windows(2) {
                    prop_assert!(scheduler.graph().has_edge(pair[0].as_str(), pair[1].as_str()));
                }
            }
            Err(other) => {
                prop_assert!(false, "unexpected error {:?}", other);
            }
        }
    }

    #[test]
    fn queries_are_idempotent(deps in any_deps_strategy(8)) {
        let scheduler = CourseScheduler::from_catalog(&catalog_from(&deps));

        prop_assert_eq!(scheduler.schedule(), scheduler.schedule());
        for course in scheduler.all_courses() {
            prop_assert_eq!(
                scheduler.minimum_prerequisite_count(&course),
                scheduler.minimum_prerequisite_count(&course)
            );
        }
    }
}
