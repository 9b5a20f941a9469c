use std::collections;

use env_logger;

use crate::ast;
use crate::ast::map_context::MapContext;
use crate::ast::node::AstNode;
use crate::ast::node::NodeRef;
use crate::ast::node::Slot;
use crate::ast::visitor::Visitor;
use crate::ast::walk;
use crate::ast::Kind;
use crate::test_util::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Pre,
    Visit,
    Post,
}

/// Records every hook invocation as a `(kind, phase)` event.
#[derive(Debug)]
struct Recorder<C> {
    events: Vec<(Kind, Phase)>,
    contexts: Vec<C>,
    handled: Vec<Kind>,
    fail_at: Option<(Kind, Phase)>,
    then_only: bool,
}

impl<C> Recorder<C> {
    fn new() -> Self {
        Recorder {
            events: Vec::new(),
            contexts: Vec::new(),
            handled: Vec::new(),
            fail_at: None,
            then_only: false,
        }
    }

    fn record(&mut self, kind: Kind, phase: Phase) -> Result<(), Kind> {
        self.events.push((kind, phase));
        if self.fail_at == Some((kind, phase)) {
            Err(kind)
        } else {
            Ok(())
        }
    }

    fn count(&self, kind: Kind) -> usize {
        self.events.iter().filter(|(k, _)| *k == kind).count()
    }
}

impl<C> Visitor<C> for Recorder<C>
where
    C: Clone,
{
    type Error = Kind;

    fn pre_visit_node(&mut self, node: NodeRef<'_, C>) -> Result<bool, Kind> {
        self.contexts.push(node.context().clone());
        self.record(node.kind(), Phase::Pre)?;
        Ok(self.handled.contains(&node.kind()))
    }

    fn post_visit_node(&mut self, node: NodeRef<'_, C>) -> Result<(), Kind> {
        self.record(node.kind(), Phase::Post)
    }

    fn pre_visit_if(&mut self, conditional: &ast::If<C>) -> Result<bool, Kind> {
        if !self.then_only {
            return self.pre_visit_node(NodeRef::If(conditional));
        }

        // Take the then-branch unconditionally and never look at the else-branch.
        self.record(Kind::If, Phase::Pre)?;
        conditional.condition.dispatch(self)?;
        conditional.then_branch.dispatch(self)?;
        Ok(true)
    }

    fn visit_program(&mut self, _program: &ast::Program<C>) -> Result<(), Kind> {
        self.record(Kind::Program, Phase::Visit)
    }

    fn visit_class(&mut self, _class: &ast::Class<C>) -> Result<(), Kind> {
        self.record(Kind::Class, Phase::Visit)
    }

    fn visit_attribute(&mut self, _attribute: &ast::Attribute<C>) -> Result<(), Kind> {
        self.record(Kind::Attribute, Phase::Visit)
    }

    fn visit_method(&mut self, _method: &ast::Method<C>) -> Result<(), Kind> {
        self.record(Kind::Method, Phase::Visit)
    }

    fn visit_formal(&mut self, _formal: &ast::Formal<C>) -> Result<(), Kind> {
        self.record(Kind::Formal, Phase::Visit)
    }

    fn visit_string_const(&mut self, _string: &ast::StringConst<C>) -> Result<(), Kind> {
        self.record(Kind::StringConst, Phase::Visit)
    }

    fn visit_int_const(&mut self, _int: &ast::IntConst<C>) -> Result<(), Kind> {
        self.record(Kind::IntConst, Phase::Visit)
    }

    fn visit_bool_const(&mut self, _boolean: &ast::BoolConst<C>) -> Result<(), Kind> {
        self.record(Kind::BoolConst, Phase::Visit)
    }

    fn visit_new(&mut self, _new: &ast::New<C>) -> Result<(), Kind> {
        self.record(Kind::New, Phase::Visit)
    }

    fn visit_is_void(&mut self, _is_void: &ast::UnaryOp<C>) -> Result<(), Kind> {
        self.record(Kind::IsVoid, Phase::Visit)
    }

    fn visit_case_branch(&mut self, _branch: &ast::CaseBranch<C>) -> Result<(), Kind> {
        self.record(Kind::CaseBranch, Phase::Visit)
    }

    fn visit_assign(&mut self, _assign: &ast::Assign<C>) -> Result<(), Kind> {
        self.record(Kind::Assign, Phase::Visit)
    }

    fn visit_block(&mut self, _block: &ast::Block<C>) -> Result<(), Kind> {
        self.record(Kind::Block, Phase::Visit)
    }

    fn visit_if(&mut self, _conditional: &ast::If<C>) -> Result<(), Kind> {
        self.record(Kind::If, Phase::Visit)
    }

    fn visit_while(&mut self, _looping: &ast::While<C>) -> Result<(), Kind> {
        self.record(Kind::While, Phase::Visit)
    }

    fn visit_complement(&mut self, _complement: &ast::UnaryOp<C>) -> Result<(), Kind> {
        self.record(Kind::Complement, Phase::Visit)
    }

    fn visit_less_than(&mut self, _less_than: &ast::BinaryOp<C>) -> Result<(), Kind> {
        self.record(Kind::LessThan, Phase::Visit)
    }

    fn visit_equal_to(&mut self, _equal_to: &ast::BinaryOp<C>) -> Result<(), Kind> {
        self.record(Kind::EqualTo, Phase::Visit)
    }

    fn visit_less_than_equal_to(
        &mut self,
        _less_than_equal_to: &ast::BinaryOp<C>,
    ) -> Result<(), Kind> {
        self.record(Kind::LessThanEqualTo, Phase::Visit)
    }

    fn visit_plus(&mut self, _plus: &ast::BinaryOp<C>) -> Result<(), Kind> {
        self.record(Kind::Plus, Phase::Visit)
    }

    fn visit_sub(&mut self, _sub: &ast::BinaryOp<C>) -> Result<(), Kind> {
        self.record(Kind::Sub, Phase::Visit)
    }

    fn visit_mul(&mut self, _mul: &ast::BinaryOp<C>) -> Result<(), Kind> {
        self.record(Kind::Mul, Phase::Visit)
    }

    fn visit_div(&mut self, _div: &ast::BinaryOp<C>) -> Result<(), Kind> {
        self.record(Kind::Div, Phase::Visit)
    }

    fn visit_not(&mut self, _not: &ast::UnaryOp<C>) -> Result<(), Kind> {
        self.record(Kind::Not, Phase::Visit)
    }

    fn visit_static_dispatch(&mut self, _dispatch: &ast::StaticDispatch<C>) -> Result<(), Kind> {
        self.record(Kind::StaticDispatch, Phase::Visit)
    }

    fn visit_dynamic_dispatch(&mut self, _dispatch: &ast::DynamicDispatch<C>) -> Result<(), Kind> {
        self.record(Kind::DynamicDispatch, Phase::Visit)
    }

    fn visit_let(&mut self, _binding: &ast::Let<C>) -> Result<(), Kind> {
        self.record(Kind::Let, Phase::Visit)
    }

    fn visit_case(&mut self, _case: &ast::Case<C>) -> Result<(), Kind> {
        self.record(Kind::Case, Phase::Visit)
    }

    fn visit_object(&mut self, _object: &ast::Object<C>) -> Result<(), Kind> {
        self.record(Kind::Object, Phase::Visit)
    }

    fn visit_no_expr(&mut self, _no_expr: &ast::NoExpr<C>) -> Result<(), Kind> {
        self.record(Kind::NoExpr, Phase::Visit)
    }
}

#[test]
fn plus_hook_order() {
    let _ = env_logger::try_init();

    let sum = plus(int(1), int(2));
    let mut recorder = Recorder::new();

    assert_eq!(Ok(()), sum.dispatch(&mut recorder));

    let expected = vec![
        (Kind::Plus, Phase::Pre),
        (Kind::IntConst, Phase::Pre),
        (Kind::IntConst, Phase::Visit),
        (Kind::IntConst, Phase::Post),
        (Kind::IntConst, Phase::Pre),
        (Kind::IntConst, Phase::Visit),
        (Kind::IntConst, Phase::Post),
        (Kind::Plus, Phase::Visit),
        (Kind::Plus, Phase::Post),
    ];
    assert_eq!(expected, recorder.events);
}

#[test]
fn default_hooks_visit_every_node_once() {
    let _ = env_logger::try_init();

    let program = every_kind();
    let mut recorder = Recorder::new();

    assert_eq!(Ok(()), program.dispatch(&mut recorder));

    let visits = recorder
        .events
        .iter()
        .filter(|(_, phase)| *phase == Phase::Visit)
        .map(|(kind, _)| *kind)
        .collect::<Vec<_>>();
    assert_eq!(walk::count_nodes(program.as_node()), visits.len());

    let seen = visits.into_iter().collect::<collections::BTreeSet<_>>();
    let all = Kind::ALL.iter().cloned().collect::<collections::BTreeSet<_>>();
    assert_eq!(all, seen);

    for &kind in Kind::ALL.iter() {
        let pre = recorder.events.contains(&(kind, Phase::Pre));
        let post = recorder.events.contains(&(kind, Phase::Post));
        assert!(pre && post, "missing hooks for {}", kind);
    }
}

#[test]
fn traversal_is_deterministic() {
    let _ = env_logger::try_init();

    let program = every_kind();

    let mut first = Recorder::new();
    let mut second = Recorder::new();
    assert_eq!(Ok(()), program.dispatch(&mut first));
    assert_eq!(Ok(()), program.dispatch(&mut second));

    assert_eq!(first.events, second.events);
}

#[test]
fn children_are_visited_before_their_parent() {
    let _ = env_logger::try_init();

    let program = every_kind();
    let mut recorder = Recorder::new();
    assert_eq!(Ok(()), program.dispatch(&mut recorder));

    let position = |event: (Kind, Phase)| {
        recorder.events.iter().position(|e| *e == event).unwrap()
    };

    assert!(position((Kind::Program, Phase::Pre)) == 0);
    assert!(position((Kind::Class, Phase::Visit)) < position((Kind::Program, Phase::Visit)));
    assert!(position((Kind::Attribute, Phase::Post)) < position((Kind::Method, Phase::Pre)));
    assert!(position((Kind::Formal, Phase::Post)) < position((Kind::Block, Phase::Pre)));
    assert_eq!(
        Some(&(Kind::Program, Phase::Post)),
        recorder.events.last()
    );
}

#[test]
fn handled_pre_visit_skips_the_whole_subtree() {
    let _ = env_logger::try_init();

    let program = every_kind();
    let mut recorder = Recorder::new();
    recorder.handled.push(Kind::If);

    assert_eq!(Ok(()), program.dispatch(&mut recorder));

    // These kinds only occur below the `if`.
    for &kind in &[
        Kind::Not,
        Kind::BoolConst,
        Kind::IsVoid,
        Kind::New,
        Kind::Complement,
    ] {
        assert_eq!(0, recorder.count(kind), "{} was visited", kind);
    }

    assert!(!recorder.events.contains(&(Kind::If, Phase::Visit)));
    assert!(!recorder.events.contains(&(Kind::If, Phase::Post)));

    let pre_if = recorder
        .events
        .iter()
        .position(|e| *e == (Kind::If, Phase::Pre))
        .unwrap();
    assert_eq!((Kind::Let, Phase::Visit), recorder.events[pre_if + 1]);
}

#[test]
fn pre_visit_can_drive_its_own_recursion() {
    let _ = env_logger::try_init();

    let program = every_kind();
    let mut recorder = Recorder::new();
    recorder.then_only = true;

    assert_eq!(Ok(()), program.dispatch(&mut recorder));

    assert_eq!(3, recorder.count(Kind::BoolConst));
    assert_eq!(3, recorder.count(Kind::New));
    assert_eq!(0, recorder.count(Kind::Complement));
    assert_eq!(1, recorder.count(Kind::If));

    let pre_if = recorder
        .events
        .iter()
        .position(|e| *e == (Kind::If, Phase::Pre))
        .unwrap();
    assert_eq!((Kind::Not, Phase::Pre), recorder.events[pre_if + 1]);
}

#[test]
fn visit_error_aborts_the_traversal() {
    let _ = env_logger::try_init();

    let program = every_kind();
    let mut recorder = Recorder::new();
    recorder.fail_at = Some((Kind::IntConst, Phase::Visit));

    assert_eq!(Err(Kind::IntConst), program.dispatch(&mut recorder));

    // The first integer literal reached is the operand of the complement.
    assert_eq!(
        Some(&(Kind::IntConst, Phase::Visit)),
        recorder.events.last()
    );
    assert!(recorder.events.contains(&(Kind::Complement, Phase::Pre)));
    assert!(!recorder.events.contains(&(Kind::Complement, Phase::Visit)));
    assert_eq!(0, recorder.count(Kind::While));
}

#[test]
fn pre_visit_error_aborts_before_the_children() {
    let _ = env_logger::try_init();

    let program = every_kind();
    let mut recorder = Recorder::new();
    recorder.fail_at = Some((Kind::Case, Phase::Pre));

    assert_eq!(Err(Kind::Case), program.dispatch(&mut recorder));
    assert_eq!(Some(&(Kind::Case, Phase::Pre)), recorder.events.last());
    assert_eq!(0, recorder.count(Kind::CaseBranch));
}

#[test]
fn deep_trees_do_not_exhaust_the_stack() {
    let _ = env_logger::try_init();

    let depth = 100_000;
    let mut tree = int(0);
    for _ in 0..depth {
        tree = ast::Expression::Not(unary(tree));
    }

    let mut recorder = Recorder::new();
    assert_eq!(Ok(()), tree.dispatch(&mut recorder));
    assert_eq!(3 * (depth + 1), recorder.events.len());
    assert_eq!(depth + 1, walk::count_nodes(tree.as_node()));

    // Dropping the tree recursively would overflow the stack, so take it apart level by level.
    let mut current = tree;
    while let ast::Expression::Not(op) = current {
        current = *op.operand;
    }
}

#[test]
#[should_panic(expected = "malformed AST: `Block` node requires at least one expression")]
fn empty_block_is_a_contract_violation() {
    let program = program(vec![class(
        "Main",
        "Object",
        vec![method("main", &[], "Object", block(vec![]))],
    )]);
    let _ = program.dispatch(&mut Recorder::new());
}

#[test]
#[should_panic(expected = "malformed AST: `Case` node requires at least one branch")]
fn case_without_branches_is_a_contract_violation() {
    let _ = case(object("x"), &[]).dispatch(&mut Recorder::new());
}

#[test]
#[should_panic(expected = "malformed AST: `Program` node requires at least one class")]
fn empty_program_is_a_contract_violation() {
    let _ = program(vec![]).dispatch(&mut Recorder::new());
}

#[test]
fn child_slots_follow_grammar_order() {
    let slots = |node: NodeRef<()>| {
        node.slots()
            .into_iter()
            .map(|(slot, child)| (slot, child.kind()))
            .collect::<Vec<_>>()
    };

    let conditional = if_(boolean(true), object("x"), no_expr());
    assert_eq!(
        vec![
            (Slot::Condition, Kind::BoolConst),
            (Slot::Then, Kind::Object),
            (Slot::Else, Kind::NoExpr),
        ],
        slots(conditional.as_node())
    );

    let method = method(
        "add",
        &[("a", "Int"), ("b", "Int")],
        "Int",
        plus(object("a"), object("b")),
    );
    assert_eq!(Kind::Method, method.kind());
    assert_eq!(
        vec![
            (Slot::Formal(0), Kind::Formal),
            (Slot::Formal(1), Kind::Formal),
            (Slot::Body, Kind::Plus),
        ],
        slots(method.as_node())
    );

    let call = dynamic_dispatch(object("o"), "f", vec![int(1), string("s")]);
    assert_eq!(
        vec![
            (Slot::Receiver, Kind::Object),
            (Slot::Argument(0), Kind::IntConst),
            (Slot::Argument(1), Kind::StringConst),
        ],
        slots(call.as_node())
    );

    let binding = let_("x", "Int", no_expr(), object("x"));
    assert_eq!(
        vec![(Slot::Initializer, Kind::NoExpr), (Slot::Body, Kind::Object)],
        slots(binding.as_node())
    );

    let case = case(object("x"), &[("i", "Int", int(1)), ("s", "String", int(2))]);
    assert_eq!(
        vec![
            (Slot::Scrutinee, Kind::Object),
            (Slot::Branch(0), Kind::CaseBranch),
            (Slot::Branch(1), Kind::CaseBranch),
        ],
        slots(case.as_node())
    );
}

#[test]
fn leaves_have_no_children() {
    for leaf in &[int(1), string("a"), boolean(false), object("x"), new("A"), no_expr()] {
        assert!(leaf.children().is_empty(), "{} has children", leaf.kind());
    }
}

#[test]
fn map_context_numbers_nodes_in_traversal_order() {
    let _ = env_logger::try_init();

    let mut next = 0usize;
    let numbered = every_kind().map_context(&mut |()| {
        let id = next;
        next += 1;
        id
    });

    assert_eq!(walk::count_nodes(numbered.as_node()), next);

    let mut recorder = Recorder::new();
    assert_eq!(Ok(()), numbered.dispatch(&mut recorder));
    assert_eq!((0..next).collect::<Vec<_>>(), recorder.contexts);

    assert_eq!(&0, numbered.as_node().context());
    assert_eq!(&1, numbered.classes[0].as_node().context());
}

#[test]
fn kind_labels_are_distinct() {
    let labels = Kind::ALL
        .iter()
        .map(|kind| kind.label())
        .collect::<collections::HashSet<_>>();

    assert_eq!(Kind::ALL.len(), labels.len());
    assert_eq!("LessThanEqualTo", Kind::LessThanEqualTo.to_string());
    assert_eq!("NoExpr", format!("{}", Kind::NoExpr));
}
