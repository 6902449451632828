use swc_core::ecma::ast::{
    BindingIdent, BreakStmt, ClassDecl, ClassExpr, ContinueStmt, FnDecl, FnExpr, Id, Ident,
    JSXClosingElement, JSXElementName, JSXMemberExpr, JSXObject, JSXOpeningElement, LabeledStmt,
    SimpleAssignTarget, TsType, TsTypeAnn, TsTypeParamDecl, TsTypeParamInstantiation,
};
use swc_core::ecma::visit::{Visit, VisitWith};

/// A single identifier occurrence in use position. `jsx_tag` marks element
/// tag names, which are allowed to miss a declaration when the tag is a
/// built-in element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub id: Id,
    pub jsx_tag: bool,
}

pub fn collect_references<N>(node: &N) -> Vec<Reference>
where
    N: VisitWith<ReferenceCollector>,
{
    let mut collector = ReferenceCollector::default();
    node.visit_with(&mut collector);
    collector.references
}

/// Walks a subtree and keeps every identifier occurrence that reads a
/// binding. Occurrences that bind a name (declarator names, parameters,
/// import locals) or merely label something (member keys, object keys,
/// statement labels) are not uses and are skipped.
#[derive(Debug, Default)]
pub struct ReferenceCollector {
    pub references: Vec<Reference>,
}

impl ReferenceCollector {
    fn add(&mut self, id: Id, jsx_tag: bool) {
        self.references.push(Reference { id, jsx_tag });
    }

    fn add_jsx_member_root(&mut self, member: &JSXMemberExpr) {
        // only the leftmost object of <Foo.Bar.Baz/> names a binding
        match &member.obj {
            JSXObject::Ident(ident) => self.add(ident.to_id(), false),
            JSXObject::JSXMemberExpr(inner) => self.add_jsx_member_root(inner),
        }
    }
}

impl Visit for ReferenceCollector {
    fn visit_ident(&mut self, ident: &Ident) {
        self.add(ident.to_id(), false);
    }

    // binding positions provide names, not uses
    fn visit_binding_ident(&mut self, _: &BindingIdent) {}

    fn visit_simple_assign_target(&mut self, target: &SimpleAssignTarget) {
        match target {
            // a write still keeps its target alive
            SimpleAssignTarget::Ident(name) => self.add(name.id.to_id(), false),
            _ => target.visit_children_with(self),
        }
    }

    fn visit_fn_decl(&mut self, decl: &FnDecl) {
        decl.function.visit_with(self);
    }

    fn visit_fn_expr(&mut self, expr: &FnExpr) {
        expr.function.visit_with(self);
    }

    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        decl.class.visit_with(self);
    }

    fn visit_class_expr(&mut self, expr: &ClassExpr) {
        expr.class.visit_with(self);
    }

    fn visit_labeled_stmt(&mut self, stmt: &LabeledStmt) {
        stmt.body.visit_with(self);
    }

    fn visit_break_stmt(&mut self, _: &BreakStmt) {}

    fn visit_continue_stmt(&mut self, _: &ContinueStmt) {}

    fn visit_jsx_opening_element(&mut self, element: &JSXOpeningElement) {
        match &element.name {
            JSXElementName::Ident(ident) => self.add(ident.to_id(), true),
            JSXElementName::JSXMemberExpr(member) => self.add_jsx_member_root(member),
            JSXElementName::JSXNamespacedName(_) => {}
        }
        element.attrs.visit_with(self);
    }

    // the closing tag repeats the opening tag's name
    fn visit_jsx_closing_element(&mut self, _: &JSXClosingElement) {}

    // type positions never contribute runtime uses
    fn visit_ts_type(&mut self, _: &TsType) {}

    fn visit_ts_type_ann(&mut self, _: &TsTypeAnn) {}

    fn visit_ts_type_param_decl(&mut self, _: &TsTypeParamDecl) {}

    fn visit_ts_type_param_instantiation(&mut self, _: &TsTypeParamInstantiation) {}
}
