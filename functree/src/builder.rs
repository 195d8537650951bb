//! Random generation of function trees.
//!
//! A tree of height `1` is a single function leaf. A taller tree starts with a random operator or
//! function; its left subtree (and, for an operator, its right subtree) is a random tree one level
//! shorter. Every leaf therefore sits at exactly the requested height.
//!
//! ```
//! use functree::{generate, tree::FunctionTree};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let tree = FunctionTree::new(generate(3, &mut rng).unwrap());
//! assert_eq!(tree.height(), 3);
//! println!("{}", tree.render());
//! ```

use crate::{
    error::{Error, InvalidHeight, InvalidProbability, InvalidWeights},
    node::{Function, FunctionKindTag, Node, NodeCategory, NodeKind, Operator},
    options::GenerateOptions,
    random::check_range,
};
use rand::{distributions::{Distribution, WeightedIndex}, Rng};
use tracing::{debug, trace};

/// How one variant out of a table of `len` variants is chosen.
#[derive(Debug, Clone)]
enum Choice {
    /// Every variant is equally likely.
    Uniform(usize),

    /// Variants are chosen according to their weights.
    Weighted(WeightedIndex<f64>),
}

impl Choice {
    /// Builds the choice for a table, validating the weights if there are any.
    fn new(table: &'static str, len: usize, weights: Option<&[f64]>) -> Result<Self, Error> {
        let Some(weights) = weights else {
            return Ok(Choice::Uniform(len));
        };

        let invalid = |reason: String| Error::new(vec![], InvalidWeights {
            table,
            expected: len,
            reason,
        });

        if weights.len() != len {
            return Err(invalid(format!("expected {} weights, got {}", len, weights.len())));
        }

        // `WeightedIndex` panics on a non-finite total instead of returning an error
        if let Some(weight) = weights.iter().find(|weight| !weight.is_finite()) {
            return Err(invalid(format!("{} is not a finite weight", weight)));
        }
        if !weights.iter().sum::<f64>().is_finite() {
            return Err(invalid("the sum of the weights is not finite".to_string()));
        }

        WeightedIndex::new(weights)
            .map(Choice::Weighted)
            .map_err(|err| invalid(err.to_string()))
    }

    /// Chooses the index of a variant.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            Choice::Uniform(len) => rng.gen_range(0..*len),
            Choice::Weighted(index) => index.sample(rng),
        }
    }
}

/// A validated set of [`GenerateOptions`], used to generate random nodes and trees.
#[derive(Debug, Clone)]
pub struct Generator {
    options: GenerateOptions,
    operators: Choice,
    functions: Choice,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            options: GenerateOptions::default(),
            operators: Choice::Uniform(Operator::ALL.len()),
            functions: Choice::Uniform(FunctionKindTag::ALL.len()),
        }
    }
}

impl Generator {
    /// Creates a generator, checking that the options can be used.
    pub fn new(options: GenerateOptions) -> Result<Self, Error> {
        check_range("coefficient", &options.coefficients, 1)?;
        check_range("exponent", &options.exponents, 1)?;
        check_range("base", &options.bases, 2)?;

        if !(0.0..=1.0).contains(&options.operator_probability) {
            return Err(Error::new(vec![], InvalidProbability { value: options.operator_probability }));
        }

        let operators = Choice::new("operator", Operator::ALL.len(), options.operator_weights.as_deref())?;
        let functions = Choice::new("function", FunctionKindTag::ALL.len(), options.function_weights.as_deref())?;

        Ok(Self { options, operators, functions })
    }

    /// The options this generator was created with.
    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Chooses a random operator.
    pub fn random_operator<R: Rng + ?Sized>(&self, rng: &mut R) -> Operator {
        Operator::ALL[self.operators.sample(rng)]
    }

    /// Creates a random function with random parameters.
    pub fn random_function<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Function, Error> {
        let tag = FunctionKindTag::ALL[self.functions.sample(rng)];
        Function::random_of_kind(tag, &self.options, rng)
    }

    /// Creates a random node of the given category, without children.
    pub fn random_node_of<R: Rng + ?Sized>(
        &self,
        category: NodeCategory,
        rng: &mut R,
    ) -> Result<NodeKind, Error> {
        match category {
            NodeCategory::Operator => Ok(NodeKind::Operator(self.random_operator(rng))),
            NodeCategory::Function => self.random_function(rng).map(NodeKind::Function),
        }
    }

    /// Creates a random node of the category named by `category` (`operator` or `function`),
    /// without children.
    pub fn random_node<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> Result<NodeKind, Error> {
        self.random_node_of(category.parse()?, rng)
    }

    /// Generates a random tree in which every leaf is at depth `max_height`.
    ///
    /// Returns [`InvalidHeight`] if `max_height` is not positive.
    pub fn generate<R: Rng + ?Sized>(&self, max_height: i64, rng: &mut R) -> Result<Node, Error> {
        debug!(max_height, "generating function tree");
        let root = self.build(max_height, rng)?;
        debug!(max_height, nodes = root.len(), "generated function tree");
        Ok(root)
    }

    fn build<R: Rng + ?Sized>(&self, max_height: i64, rng: &mut R) -> Result<Node, Error> {
        if max_height <= 0 {
            return Err(Error::new(vec![], InvalidHeight { height: max_height }));
        }

        if max_height == 1 {
            let func = self.random_function(rng)?;
            trace!(max_height, node = %func, "chose leaf");
            return Ok(Node::leaf(func));
        }

        let category = if rng.gen_bool(self.options.operator_probability) {
            NodeCategory::Operator
        } else {
            NodeCategory::Function
        };
        let kind = self.random_node_of(category, rng)?;
        trace!(max_height, node = %kind, "chose node");

        // every inner node has a left child; operators also have a right child
        let left = self.build(max_height - 1, rng)?;
        match kind {
            NodeKind::Operator(op) => {
                let right = self.build(max_height - 1, rng)?;
                Ok(Node::operator(op, left, right))
            },
            NodeKind::Function(func) => Ok(Node::function(func, left)),
        }
    }
}

/// Generates a random tree of height `max_height` with the default options.
///
/// Returns [`InvalidHeight`] if `max_height` is not positive.
pub fn generate<R: Rng + ?Sized>(max_height: i64, rng: &mut R) -> Result<Node, Error> {
    Generator::default().generate(max_height, rng)
}

/// Creates a random node of the category named by `category` (`operator` or `function`) with the
/// default options, without children.
pub fn random_node<R: Rng + ?Sized>(category: &str, rng: &mut R) -> Result<NodeKind, Error> {
    Generator::default().random_node(category, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{InvalidNodeCategory, InvalidRange},
        node::FunctionKind,
        options::GenerateOptionsBuilder,
    };
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    /// Returns the depth of every leaf under `node`, where `node` is at depth `depth`.
    fn leaf_depths(node: &Node, depth: usize, out: &mut Vec<usize>) {
        if node.is_leaf() {
            out.push(depth);
        }
        for child in node.children() {
            leaf_depths(child, depth + 1, out);
        }
    }

    #[test]
    fn height_one_is_leaf() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let node = generate(1, &mut rng).unwrap();
            assert!(node.is_leaf());
            assert!(matches!(node, Node::Function { input: None, .. }));
        }
    }

    #[test]
    fn leaves_at_max_height() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let height = (seed % 5 + 2) as i64;
            let node = generate(height, &mut rng).unwrap();

            let mut depths = Vec::new();
            leaf_depths(&node, 1, &mut depths);
            assert!(depths.iter().all(|&d| d == height as usize), "{:?}", depths);
        }
    }

    #[test]
    fn arity() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let node = generate(5, &mut rng).unwrap();
            for node in node.iter() {
                match node {
                    Node::Operator { .. } => assert_eq!(node.children().count(), 2),
                    Node::Function { .. } => assert!(node.children().count() <= 1),
                }
            }
        }
    }

    #[test]
    fn non_positive_height() {
        let mut rng = StdRng::seed_from_u64(0);
        for height in [0, -1, -10] {
            let err = generate(height, &mut rng).unwrap_err();
            assert!(err.is::<InvalidHeight>());
            assert_eq!(err.downcast_ref::<InvalidHeight>(), Some(&InvalidHeight { height }));
        }
    }

    #[test]
    fn deterministic_with_seed() {
        let a = generate(4, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(4, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn operator_probability_extremes() {
        let only_functions = Generator::new(
            GenerateOptionsBuilder::new().operator_probability(0.0).build(),
        ).unwrap();
        let node = only_functions.generate(4, &mut StdRng::seed_from_u64(5)).unwrap();
        assert!(node.iter().all(|n| n.category() == NodeCategory::Function));
        assert_eq!(node.len(), 4);

        let only_operators = Generator::new(
            GenerateOptionsBuilder::new().operator_probability(1.0).build(),
        ).unwrap();
        let node = only_operators.generate(4, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(node.len(), 15);
    }

    #[test]
    fn weighted_variants() {
        let options = GenerateOptionsBuilder::new()
            .operator_probability(1.0)
            .operator_weights([0.0, 0.0, 0.0, 1.0])
            .function_weights([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .coefficients(5..=5)
            .build();
        let generator = Generator::new(options).unwrap();
        let node = generator.generate(2, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(node, Node::operator(
            Operator::Division,
            Node::leaf(Function::constant(5)),
            Node::leaf(Function::constant(5)),
        ));
    }

    #[test]
    fn invalid_weights() {
        let wrong_len = GenerateOptionsBuilder::new().operator_weights([1.0, 2.0]).build();
        let err = Generator::new(wrong_len).unwrap_err();
        assert!(err.is::<InvalidWeights>());
        assert_eq!(err.to_string(), "invalid operator weights: expected 4 weights, got 2");

        let all_zero = GenerateOptionsBuilder::new().function_weights([0.0; 9]).build();
        assert!(Generator::new(all_zero).unwrap_err().is::<InvalidWeights>());
    }

    #[test]
    fn non_finite_weights() {
        let infinite = GenerateOptionsBuilder::new()
            .operator_weights([f64::INFINITY, 1.0, 1.0, 1.0])
            .build();
        let err = Generator::new(infinite).unwrap_err();
        assert!(err.is::<InvalidWeights>());
        assert_eq!(err.to_string(), "invalid operator weights: inf is not a finite weight");

        let nan = GenerateOptionsBuilder::new().operator_weights([1.0, f64::NAN, 1.0, 1.0]).build();
        assert!(Generator::new(nan).unwrap_err().is::<InvalidWeights>());

        let overflowing = GenerateOptionsBuilder::new().function_weights([f64::MAX; 9]).build();
        let err = Generator::new(overflowing).unwrap_err();
        assert!(err.is::<InvalidWeights>());
        assert_eq!(err.to_string(), "invalid function weights: the sum of the weights is not finite");
    }

    #[test]
    fn invalid_options() {
        let options = GenerateOptionsBuilder::new().bases(1..=4).build();
        assert!(Generator::new(options).unwrap_err().is::<InvalidRange>());

        let options = GenerateOptionsBuilder::new().coefficients(0..=4).build();
        assert!(Generator::new(options).unwrap_err().is::<InvalidRange>());

        let options = GenerateOptionsBuilder::new().operator_probability(1.5).build();
        assert!(Generator::new(options).unwrap_err().is::<InvalidProbability>());
    }

    #[test]
    fn random_node_by_category() {
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(random_node("operator", &mut rng).unwrap().category(), NodeCategory::Operator);
        assert_eq!(random_node("function", &mut rng).unwrap().category(), NodeCategory::Function);

        let err = random_node("constant", &mut rng).unwrap_err();
        assert!(err.is::<InvalidNodeCategory>());
        assert_eq!(err.to_string(), "`constant` is an invalid node category");
    }

    #[test]
    fn frac_monomials_are_drawn() {
        let options = GenerateOptionsBuilder::new()
            .function_weights([0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .build();
        let generator = Generator::new(options).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let func = generator.random_function(&mut rng).unwrap();
            assert!(matches!(func.kind(), FunctionKind::FracMonomial { .. }));
        }
    }
}
