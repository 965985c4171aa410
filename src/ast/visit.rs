//! Mutable traversal over syntax trees
//!
//! `AstVisitor` follows the enter-then-descend pattern: every `visit_*`
//! method receives an exclusive reference to its node and defaults to the
//! matching `walk_*` function, which recurses into the children. An
//! implementation overrides the methods for the node categories it cares
//! about; because the reference is mutable, the override may rewrite fields
//! or substitute the node wholesale before the children are walked. A full
//! walk visits every reachable node exactly once.

use super::{
    Block, Expression, FunctionDeclaration, Identifier, IfStatement, Literal, Statement,
    VariableDeclaration, VariableDeclarator,
};

pub trait AstVisitor {
    fn visit_statement(&mut self, s: &mut Statement) {
        walk_statement(self, s);
    }
    fn visit_variable_declaration(&mut self, s: &mut VariableDeclaration) {
        walk_variable_declaration(self, s);
    }
    fn visit_declarator(&mut self, s: &mut VariableDeclarator) {
        walk_declarator(self, s);
    }
    fn visit_function_declaration(&mut self, s: &mut FunctionDeclaration) {
        walk_function_declaration(self, s);
    }
    fn visit_if(&mut self, s: &mut IfStatement) {
        walk_if(self, s);
    }
    fn visit_block(&mut self, s: &mut Block) {
        walk_block(self, s);
    }
    fn visit_expression(&mut self, s: &mut Expression) {
        walk_expression(self, s);
    }
    fn visit_identifier(&mut self, _s: &mut Identifier) {}
    fn visit_literal(&mut self, _s: &mut Literal) {}
}

pub fn walk_statement<T: AstVisitor + ?Sized>(visitor: &mut T, s: &mut Statement) {
    match s {
        Statement::VariableDeclaration(decl) => visitor.visit_variable_declaration(decl),
        Statement::Expression(expr) => visitor.visit_expression(expr),
        Statement::Block(block) => visitor.visit_block(block),
        Statement::FunctionDeclaration(func) => visitor.visit_function_declaration(func),
        Statement::If(stmt) => visitor.visit_if(stmt),
        Statement::Return(expr) => {
            if let Some(expr) = expr {
                visitor.visit_expression(expr);
            }
        }
        Statement::Empty => {}
    }
}

pub fn walk_variable_declaration<T: AstVisitor + ?Sized>(
    visitor: &mut T,
    s: &mut VariableDeclaration,
) {
    s.declarations
        .iter_mut()
        .for_each(|d| visitor.visit_declarator(d));
}

pub fn walk_declarator<T: AstVisitor + ?Sized>(visitor: &mut T, s: &mut VariableDeclarator) {
    visitor.visit_identifier(&mut s.name);
    if let Some(init) = &mut s.init {
        visitor.visit_expression(init);
    }
}

pub fn walk_function_declaration<T: AstVisitor + ?Sized>(
    visitor: &mut T,
    s: &mut FunctionDeclaration,
) {
    visitor.visit_identifier(&mut s.name);
    s.params
        .iter_mut()
        .for_each(|p| visitor.visit_identifier(p));
    visitor.visit_block(&mut s.body);
}

pub fn walk_if<T: AstVisitor + ?Sized>(visitor: &mut T, s: &mut IfStatement) {
    visitor.visit_expression(&mut s.condition);
    visitor.visit_statement(&mut s.consequent);
    if let Some(alternate) = &mut s.alternate {
        visitor.visit_statement(alternate);
    }
}

pub fn walk_block<T: AstVisitor + ?Sized>(visitor: &mut T, s: &mut Block) {
    s.statements
        .iter_mut()
        .for_each(|stmt| visitor.visit_statement(stmt));
}

pub fn walk_expression<T: AstVisitor + ?Sized>(visitor: &mut T, s: &mut Expression) {
    match s {
        Expression::Identifier(id) => visitor.visit_identifier(id),
        Expression::Literal(lit) => visitor.visit_literal(lit),
        Expression::Call(call) => {
            visitor.visit_expression(&mut call.callee);
            call.arguments
                .iter_mut()
                .for_each(|a| visitor.visit_expression(a));
        }
        Expression::Binary(bin) => {
            visitor.visit_expression(&mut bin.left);
            visitor.visit_expression(&mut bin.right);
        }
        Expression::Assignment(assign) => {
            visitor.visit_expression(&mut assign.target);
            visitor.visit_expression(&mut assign.value);
        }
        Expression::Function(func) => {
            if let Some(name) = &mut func.name {
                visitor.visit_identifier(name);
            }
            func.params
                .iter_mut()
                .for_each(|p| visitor.visit_identifier(p));
            visitor.visit_block(&mut func.body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        AssignmentExpression, BinaryExpression, BinaryOperator, CallExpression, DeclarationKind,
        FunctionExpression,
    };

    /// Counts identifiers seen during a walk
    struct IdentifierCounter {
        count: usize,
    }

    impl AstVisitor for IdentifierCounter {
        fn visit_identifier(&mut self, _s: &mut Identifier) {
            self.count += 1;
        }
    }

    /// Replaces every empty statement with a return
    struct EmptyReplacer;

    impl AstVisitor for EmptyReplacer {
        fn visit_statement(&mut self, s: &mut Statement) {
            if matches!(s, Statement::Empty) {
                *s = Statement::Return(None);
            }
            walk_statement(self, s);
        }
    }

    fn nested_statement() -> Statement {
        // function f(a) { var x = g(b); { c = d + e; } }
        Statement::FunctionDeclaration(FunctionDeclaration {
            name: Identifier::new("f"),
            params: vec![Identifier::new("a")],
            body: Block::new(vec![
                Statement::VariableDeclaration(VariableDeclaration::new(
                    DeclarationKind::Var,
                    vec![VariableDeclarator::new(
                        "x",
                        Some(Expression::Call(CallExpression {
                            callee: Box::new(Expression::identifier("g")),
                            arguments: vec![Expression::identifier("b")],
                        })),
                    )],
                )),
                Statement::Block(Block::new(vec![Statement::Expression(
                    Expression::Assignment(AssignmentExpression {
                        target: Box::new(Expression::identifier("c")),
                        value: Box::new(Expression::Binary(BinaryExpression {
                            operator: BinaryOperator::Add,
                            left: Box::new(Expression::identifier("d")),
                            right: Box::new(Expression::identifier("e")),
                        })),
                    }),
                )])),
            ]),
        })
    }

    #[test]
    fn test_walk_reaches_every_identifier() {
        let mut stmt = nested_statement();
        let mut counter = IdentifierCounter { count: 0 };
        counter.visit_statement(&mut stmt);
        // f, a, x, g, b, c, d, e
        assert_eq!(counter.count, 8);
    }

    #[test]
    fn test_walk_descends_into_function_expressions() {
        // h(function () { let y; })
        let mut stmt = Statement::Expression(Expression::Call(CallExpression {
            callee: Box::new(Expression::identifier("h")),
            arguments: vec![Expression::Function(FunctionExpression {
                name: None,
                params: vec![],
                body: Block::new(vec![Statement::VariableDeclaration(
                    VariableDeclaration::new(
                        DeclarationKind::Let,
                        vec![VariableDeclarator::new("y", None)],
                    ),
                )]),
            })],
        }));

        let mut counter = IdentifierCounter { count: 0 };
        counter.visit_statement(&mut stmt);
        // h, y
        assert_eq!(counter.count, 2);
    }

    #[test]
    fn test_visitor_can_replace_nodes_wholesale() {
        let mut stmt = Statement::Block(Block::new(vec![
            Statement::Empty,
            Statement::Expression(Expression::identifier("x")),
            Statement::Empty,
        ]));

        EmptyReplacer.visit_statement(&mut stmt);

        match stmt {
            Statement::Block(block) => {
                assert_eq!(block.statements[0], Statement::Return(None));
                assert_eq!(
                    block.statements[1],
                    Statement::Expression(Expression::identifier("x"))
                );
                assert_eq!(block.statements[2], Statement::Return(None));
            }
            other => panic!("Expected Block, got {:?}", other),
        }
    }
}
