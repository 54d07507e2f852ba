//! §4.3 operator remap table, driven as a single parameterized case set
//! instead of one `#[test]` per operator.

use islxform::transform::map_operator;
use rstest::rstest;

#[rstest]
#[case("!=", "~=")]
#[case("!", "not")]
#[case("&&", "and")]
#[case("||", "or")]
#[case("??", "or")]
#[case("+", "+")]
#[case("-", "-")]
#[case("==", "==")]
#[case("<=", "<=")]
#[case("..", "..")]
fn remaps_to_the_output_runtimes_spelling(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(map_operator(input), expected);
}
