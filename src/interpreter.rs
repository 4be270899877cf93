use std::io::Write;

use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::expr::{self, Expr, ExprVisitor};
use crate::literal::Literal;
use crate::stmt::{self, Stmt, StmtVisitor};
use crate::token::Type;

type EvalResult = Result<Literal, RuntimeError>;
type ExecResult = Result<(), RuntimeError>;

/// Walks statements against a lexically-scoped environment chain, writing
/// `print` output to a host-provided sink rather than directly to stdout —
/// this is what lets tests capture output without touching the real
/// terminal.
pub struct Interpreter<W: Write> {
    environment: Environment,
    output: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(output: W) -> Self {
        Interpreter { environment: Environment::new(), output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes statements in order. Stops at the first runtime error and
    /// returns it; the caller reports it and moves on, the environment is
    /// left as of the failing statement.
    pub fn interpret(&mut self, statements: &[Stmt]) -> ExecResult {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    fn execute_block(&mut self, statements: &[Stmt]) -> ExecResult {
        let previous = std::mem::take(&mut self.environment);
        self.environment = previous.child();

        let result = (|| {
            for statement in statements {
                self.execute(statement)?;
            }
            Ok(())
        })();

        let child = std::mem::take(&mut self.environment);
        self.environment = child.pop();

        result
    }

    fn check_number(operator: &crate::token::Token, value: &Literal) -> Result<f64, RuntimeError> {
        match value {
            Literal::Number(n) => Ok(*n),
            _ => Err(RuntimeError {
                token: operator.clone(),
                message: "Operand must be a number.".to_string(),
            }),
        }
    }
}

impl<W: Write> ExprVisitor<EvalResult> for Interpreter<W> {
    fn visit_literal_expr(&mut self, literal: &Literal) -> EvalResult {
        Ok(literal.clone())
    }

    fn visit_grouping_expr(&mut self, grouping: &expr::GroupingData) -> EvalResult {
        self.evaluate(&grouping.expr)
    }

    fn visit_unary_expr(&mut self, unary: &expr::UnaryData) -> EvalResult {
        let right = self.evaluate(&unary.expr)?;

        match unary.operator.kind {
            Type::Minus => Ok(Literal::Number(-Self::check_number(&unary.operator, &right)?)),
            Type::Bang => Ok(Literal::Boolean(!right.is_truthy())),
            _ => unreachable!("unary operator token kind is always Minus or Bang"),
        }
    }

    fn visit_binary_expr(&mut self, binary: &expr::BinaryData) -> EvalResult {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;
        let operator = &binary.operator;

        match operator.kind {
            Type::Plus => match (&left, &right) {
                (Literal::Number(l), Literal::Number(r)) => Ok(Literal::Number(l + r)),
                (Literal::String(l), Literal::String(r)) => Ok(Literal::String(format!("{l}{r}"))),
                _ => Err(RuntimeError {
                    token: operator.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                }),
            },
            Type::Minus => {
                let (l, r) = (Self::check_number(operator, &left)?, Self::check_number(operator, &right)?);
                Ok(Literal::Number(l - r))
            }
            Type::Star => {
                let (l, r) = (Self::check_number(operator, &left)?, Self::check_number(operator, &right)?);
                Ok(Literal::Number(l * r))
            }
            Type::Slash => {
                let (l, r) = (Self::check_number(operator, &left)?, Self::check_number(operator, &right)?);
                if r == 0.0 {
                    return Err(RuntimeError {
                        token: operator.clone(),
                        message: "Can't divide by zero.".to_string(),
                    });
                }
                Ok(Literal::Number(l / r))
            }
            Type::Modulo => {
                let (l, r) = (Self::check_number(operator, &left)?, Self::check_number(operator, &right)?);
                if r == 0.0 {
                    return Err(RuntimeError {
                        token: operator.clone(),
                        message: "Can't divide by zero.".to_string(),
                    });
                }
                Ok(Literal::Number(l % r))
            }
            Type::Greater => {
                let (l, r) = (Self::check_number(operator, &left)?, Self::check_number(operator, &right)?);
                Ok(Literal::Boolean(l > r))
            }
            Type::GreaterEqual => {
                let (l, r) = (Self::check_number(operator, &left)?, Self::check_number(operator, &right)?);
                Ok(Literal::Boolean(l >= r))
            }
            Type::Less => {
                let (l, r) = (Self::check_number(operator, &left)?, Self::check_number(operator, &right)?);
                Ok(Literal::Boolean(l < r))
            }
            Type::LessEqual => {
                let (l, r) = (Self::check_number(operator, &left)?, Self::check_number(operator, &right)?);
                Ok(Literal::Boolean(l <= r))
            }
            Type::EqualEqual => Ok(Literal::Boolean(is_equal(&left, &right))),
            Type::BangEqual => Ok(Literal::Boolean(!is_equal(&left, &right))),
            _ => unreachable!("binary operator token kind is always one of the arithmetic/comparison kinds"),
        }
    }

    fn visit_logical_expr(&mut self, logical: &expr::LogicalData) -> EvalResult {
        let left = self.evaluate(&logical.left)?;

        match logical.operator.kind {
            Type::Or if left.is_truthy() => Ok(left),
            Type::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(&logical.right),
        }
    }

    fn visit_variable_expr(&mut self, variable: &expr::VariableData) -> EvalResult {
        self.environment.get(&variable.name)
    }

    fn visit_assign_expr(&mut self, assign: &expr::AssignData) -> EvalResult {
        let value = self.evaluate(&assign.value)?;
        self.environment.assign(&assign.name, value.clone())?;
        Ok(value)
    }
}

impl<W: Write> StmtVisitor<ExecResult> for Interpreter<W> {
    fn visit_expression_stmt(&mut self, stmt: &stmt::ExpressionData) -> ExecResult {
        self.evaluate(&stmt.expr)?;
        Ok(())
    }

    fn visit_print_stmt(&mut self, stmt: &stmt::PrintData) -> ExecResult {
        let value = self.evaluate(&stmt.expr)?;
        writeln!(self.output, "{value}").expect("write to print sink");
        Ok(())
    }

    fn visit_var_stmt(&mut self, stmt: &stmt::VarData) -> ExecResult {
        let value = match &stmt.initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Literal::Nil,
        };

        self.environment.define(&stmt.name.lexeme, value);
        Ok(())
    }

    fn visit_block_stmt(&mut self, stmt: &stmt::BlockData) -> ExecResult {
        self.execute_block(&stmt.statements)
    }

    fn visit_if_stmt(&mut self, stmt: &stmt::IfData) -> ExecResult {
        if self.evaluate(&stmt.condition)?.is_truthy() {
            self.execute(&stmt.then_branch)
        } else if let Some(else_branch) = &stmt.else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    fn visit_while_stmt(&mut self, stmt: &stmt::WhileData) -> ExecResult {
        while self.evaluate(&stmt.condition)?.is_truthy() {
            self.execute(&stmt.body)?;
        }
        Ok(())
    }
}

impl Interpreter<Vec<u8>> {
    pub fn output(&self) -> &[u8] {
        &self.output
    }
}

/// `Nil` equals only `Nil`; otherwise structural equality. Cross-type
/// comparisons are false, never an error.
fn is_equal(left: &Literal, right: &Literal) -> bool {
    match (left, right) {
        (Literal::Nil, Literal::Nil) => true,
        (Literal::Nil, _) | (_, Literal::Nil) => false,
        _ => left == right,
    }
}
