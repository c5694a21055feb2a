use std::fmt;

use crate::cs::list::LinkedList;
use crate::error::Result;

/// Number of cases in [`all_test_cases`].
pub const TOTAL_TEST_CASES: usize = 32;

/// One graded list shape: the values to build, where the tail links back to
/// (if anywhere), and the answer a correct detector gives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub description: String,
    pub values: Vec<i32>,
    pub cycle_pos: Option<usize>,
    pub expected: bool,
}

impl TestCase {
    pub fn new(
        description: impl Into<String>,
        values: Vec<i32>,
        cycle_pos: Option<usize>,
        expected: bool,
    ) -> Self {
        TestCase {
            description: description.into(),
            values,
            cycle_pos,
            expected,
        }
    }

    /// Builds a fresh list for this case, splicing the back-edge if one is set.
    pub fn build_list(&self) -> Result<LinkedList<i32>> {
        let list = LinkedList::from_values(self.values.iter().copied())?;
        match self.cycle_pos {
            Some(pos) => list.with_cycle_at(pos),
            None => Ok(list),
        }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cycle_pos {
            Some(pos) => write!(f, "{} (cycle at pos {})", self.description, pos)?,
            None => write!(f, "{} (no cycle)", self.description)?,
        }
        write!(f, " -> Expected: {}", self.expected)
    }
}

fn case(description: &str, values: Vec<i32>, cycle_pos: Option<usize>) -> TestCase {
    TestCase::new(description, values, cycle_pos, cycle_pos.is_some())
}

/// The full catalogue: basic, medium, large and edge-value shapes.
pub fn all_test_cases() -> Vec<TestCase> {
    let mut cases = Vec::with_capacity(TOTAL_TEST_CASES);

    // basic
    cases.extend([
        case("Single node, no cycle", vec![1], None),
        case("Two nodes, no cycle", vec![1, 2], None),
        case("Two nodes, with cycle", vec![1, 2], Some(0)),
        case("Three nodes, no cycle", vec![1, 2, 3], None),
        case("Three nodes, cycle at pos 0", vec![1, 2, 3], Some(0)),
        case("Three nodes, cycle at pos 1", vec![1, 2, 3], Some(1)),
        case("Four nodes, no cycle", vec![1, 2, 3, 4], None),
        case("Four nodes, cycle at pos 2", vec![1, 2, 3, 4], Some(2)),
    ]);

    // medium
    let five = vec![10, 20, 30, 40, 50];
    let seven = vec![100, 200, 300, 400, 500, 600, 700];
    let ten: Vec<i32> = (1..11).collect();
    cases.extend([
        case("5 nodes, no cycle", five.clone(), None),
        case("5 nodes, cycle at pos 0", five.clone(), Some(0)),
        case("5 nodes, cycle at pos 2", five.clone(), Some(2)),
        case("5 nodes, cycle at pos 4", five, Some(4)),
        case("7 nodes, no cycle", seven.clone(), None),
        case("7 nodes, cycle at pos 1", seven.clone(), Some(1)),
        case("7 nodes, cycle at pos 3", seven, Some(3)),
        case("10 nodes, no cycle", ten.clone(), None),
        case("10 nodes, cycle at pos 5", ten.clone(), Some(5)),
        case("10 nodes, cycle at pos 8", ten, Some(8)),
    ]);

    // large
    let twenty: Vec<i32> = (100..120).collect();
    let fifty: Vec<i32> = (500..550).collect();
    let hundred: Vec<i32> = (1000..1100).collect();
    cases.extend([
        case("20 nodes, no cycle", twenty.clone(), None),
        case("20 nodes, cycle at pos 5", twenty.clone(), Some(5)),
        case("20 nodes, cycle at pos 15", twenty, Some(15)),
        case("50 nodes, no cycle", fifty.clone(), None),
        case("50 nodes, cycle at pos 10", fifty.clone(), Some(10)),
        case("50 nodes, cycle at pos 40", fifty, Some(40)),
        case("100 nodes, no cycle", hundred.clone(), None),
        case("100 nodes, cycle at pos 50", hundred, Some(50)),
    ]);

    // edge values
    let large = vec![9001, 9002, 9003, 9004, 9005];
    let sequential: Vec<i32> = (1..21).collect();
    let scattered = vec![42, 17, 99, 3, 88, 156, 7];
    cases.extend([
        case("Large values, no cycle", large.clone(), None),
        case("Large values, with cycle", large, Some(2)),
        case("Sequential 1-20, no cycle", sequential.clone(), None),
        case("Sequential 1-20, cycle at pos 10", sequential, Some(10)),
        case("Scattered values, no cycle", scattered.clone(), None),
        case("Scattered values, with cycle", scattered, Some(3)),
    ]);

    cases
}
