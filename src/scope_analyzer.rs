// File: src/scope_analyzer.rs
//
// Scope analyzer for the Rill programming language.
// Performs name resolution checks on the AST before later compilation stages.
//
// Features:
// - Lexical scoping with nested block scopes and shadowing
// - Forward references between functions regardless of declaration order
// - Collects every error in one pass instead of stopping at the first
//
// The analyzer uses a three-phase approach:
// 1. First phase: collect global variable and function declarations
// 2. Second phase: check each function body in its own scope
// 3. Third phase: check global initializers against the global scope

use crate::ast::{Expr, Function, Program, Stmt, TypeTag, VarDecl};
use crate::errors::{find_closest_match, ScopeError};
use crate::scope::ScopeStack;

/// Walks a whole program and accumulates every scope error it finds.
///
/// The analyzer never mutates the AST and never aborts early: a single
/// `check` call yields the complete error set for the program. All state
/// is rebuilt at the top of each `check` call, so one instance can be
/// reused across programs sequentially.
pub struct ScopeAnalyzer {
	/// Active lexical scopes; the global scope sits at the bottom.
	scopes: ScopeStack,
	/// Errors in discovery order.
	errors: Vec<ScopeError>,
}

impl ScopeAnalyzer {
	/// Creates an analyzer with an empty global scope.
	pub fn new() -> Self {
		ScopeAnalyzer {
			scopes: ScopeStack::new(),
			errors: Vec::new(),
		}
	}

	/// Checks a whole program.
	///
	/// Returns true iff no errors were recorded. The full error list stays
	/// available through `errors()` afterwards.
	pub fn check(&mut self, program: &Program) -> bool {
		self.scopes = ScopeStack::new();
		self.errors.clear();

		// Phase 1: declare every global name before looking inside anything,
		// so forward references between functions and globals resolve.
		// Globals and functions share the global namespace.
		for var in &program.globals {
			if !self.scopes.declare(&var.name, var.ty) {
				self.errors.push(ScopeError::variable_redefined(&var.name));
			}
		}

		for func in &program.functions {
			if !self.scopes.declare(&func.name, TypeTag::Function) {
				self.errors.push(ScopeError::function_redefined(&func.name));
			}
		}

		// Phase 2: function bodies, in declaration order.
		for func in &program.functions {
			self.check_function(func);
		}

		// Phase 3: global initializers, after every global name is known.
		for var in &program.globals {
			if let Some(init) = &var.init {
				self.check_expr(init);
			}
		}

		self.errors.is_empty()
	}

	/// True iff the last `check` recorded no errors.
	pub fn passed(&self) -> bool {
		self.errors.is_empty()
	}

	/// The errors recorded by the last `check`, in discovery order.
	pub fn errors(&self) -> &[ScopeError] {
		&self.errors
	}

	pub fn error_count(&self) -> usize {
		self.errors.len()
	}

	/// Check one function: parameters and body share a scope chain rooted
	/// in the global scope.
	fn check_function(&mut self, func: &Function) {
		self.scopes.enter();

		for param in &func.params {
			// A duplicate parameter keeps the first binding; later
			// parameters still get declared.
			if !self.scopes.declare(&param.name, param.ty) {
				self.errors.push(ScopeError::variable_redefined(&param.name));
			}
		}

		if let Some(body) = &func.body {
			self.check_stmt(body);
		}

		self.scopes.leave();
	}

	/// Check a single statement
	fn check_stmt(&mut self, stmt: &Stmt) {
		match stmt {
			Stmt::Block(stmts) => {
				// Every block is its own scope, whatever its nesting depth.
				self.scopes.enter();
				for s in stmts {
					self.check_stmt(s);
				}
				self.scopes.leave();
			}

			Stmt::VarDecl(decl) => {
				self.check_var_decl(decl);
			}

			Stmt::Assign { target, value } => {
				self.check_expr(value);
				if self.scopes.resolve(target).is_none() {
					self.report_undeclared_variable(target);
				}
			}

			Stmt::ExprStmt(expr) => {
				self.check_expr(expr);
			}

			Stmt::Return(value) => {
				// A bare `return;` is fine.
				if let Some(expr) = value {
					self.check_expr(expr);
				}
			}

			Stmt::If { condition, then_branch, else_branch } => {
				self.check_expr(condition);
				self.check_stmt(then_branch);
				if let Some(else_stmt) = else_branch {
					self.check_stmt(else_stmt);
				}
			}

			Stmt::While { condition, body } => {
				self.check_expr(condition);
				self.check_stmt(body);
			}

			Stmt::For { init, condition, step, body } => {
				// One scope covers the whole loop: a variable declared in
				// the header is visible to the condition, step, and body.
				self.scopes.enter();
				if let Some(init_stmt) = init {
					self.check_stmt(init_stmt);
				}
				if let Some(cond) = condition {
					self.check_expr(cond);
				}
				if let Some(step_stmt) = step {
					self.check_stmt(step_stmt);
				}
				self.check_stmt(body);
				self.scopes.leave();
			}
		}
	}

	/// Declare a local variable, then check its initializer.
	///
	/// The name is bound before the initializer is checked, so an
	/// initializer may refer to the variable it initializes.
	fn check_var_decl(&mut self, decl: &VarDecl) {
		if self.scopes.declared_here(&decl.name) {
			// Same-scope redefinition; the first binding is kept.
			self.errors.push(ScopeError::variable_redefined(&decl.name));
		} else {
			self.scopes.declare(&decl.name, decl.ty);
		}

		if let Some(init) = &decl.init {
			self.check_expr(init);
		}
	}

	/// Check a single expression
	fn check_expr(&mut self, expr: &Expr) {
		match expr {
			Expr::Literal { .. } => {
				// Literals are always valid.
			}

			Expr::Name(name) => {
				if self.scopes.resolve(name).is_none() {
					self.report_undeclared_variable(name);
				}
			}

			Expr::BinaryOp { left, right, .. } => {
				self.check_expr(left);
				self.check_expr(right);
			}

			Expr::Call { name, args } => {
				// Functions live in the global scope only; a local binding
				// with the same name never satisfies a call.
				if self.scopes.resolve_global(name) != Some(TypeTag::Function) {
					self.report_undefined_function(name);
				}
				// Arguments resolve against the caller's scope as usual.
				for arg in args {
					self.check_expr(arg);
				}
			}
		}
	}

	fn report_undeclared_variable(&mut self, name: &str) {
		let candidates = self.scopes.visible_names();
		let mut error = ScopeError::undeclared_variable(name);
		if let Some(closest) = find_closest_match(name, &candidates) {
			error = error.with_suggestion(closest);
		}
		self.errors.push(error);
	}

	fn report_undefined_function(&mut self, name: &str) {
		let candidates: Vec<String> = self
			.scopes
			.visible_names()
			.into_iter()
			.filter(|n| self.scopes.resolve_global(n) == Some(TypeTag::Function))
			.collect();
		let mut error = ScopeError::undefined_function(name);
		if let Some(closest) = find_closest_match(name, &candidates) {
			error = error.with_suggestion(closest);
		}
		self.errors.push(error);
	}
}

impl Default for ScopeAnalyzer {
	fn default() -> Self {
		Self::new()
	}
}
