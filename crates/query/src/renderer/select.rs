use crate::{
    ast::select::{Projection, Select},
    renderer::Render,
};

impl Render for Select {
    fn render(&self, r: &mut super::Renderer) {
        // 1. SELECT <columns|*>
        r.sql.push_str("SELECT ");
        match &self.projection {
            Projection::Wildcard => r.sql.push('*'),
            Projection::Columns(cols) => r.sql.push_str(&cols.join(", ")),
        }

        // 2. FROM <schema>.<table>
        r.sql.push_str(" FROM ");
        r.sql.push_str(&self.table.schema);
        r.sql.push('.');
        r.sql.push_str(&self.table.name);

        // 3. WHERE, omitted entirely when the chain is empty
        if !self.conditions.is_empty() {
            r.sql.push_str(" WHERE ");
            for cond in &self.conditions {
                if let Some(joiner) = &cond.joined_by {
                    r.sql.push(' ');
                    r.sql.push_str(&joiner.to_string());
                    r.sql.push(' ');
                }
                r.sql.push_str(&cond.column);
                r.sql.push(' ');
                r.sql.push_str(&cond.op.to_string());
                r.sql.push_str(" '");
                r.sql.push_str(&cond.value);
                r.sql.push('\'');
            }
        }

        // 4. ORDER BY, omitted when empty
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            let specs: Vec<String> = self
                .order_by
                .iter()
                .map(|s| format!("{} {}", s.column, s.direction))
                .collect();
            r.sql.push_str(&specs.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{
            TableRef,
            select::{Projection, Select},
        },
        renderer::render,
    };
    use model::{
        condition::Condition,
        operator::{CompareOp, LogicalOp},
        order::{OrderDir, OrderSpec},
    };

    fn select(projection: Projection) -> Select {
        Select {
            table: TableRef::new("public", "users"),
            projection,
            conditions: vec![],
            order_by: vec![],
        }
    }

    #[test]
    fn test_render_without_conditions_omits_where() {
        let ast = select(Projection::Columns(vec![
            "id".to_string(),
            "name".to_string(),
        ]));
        assert_eq!(render(&ast), "SELECT id, name FROM public.users");
    }

    #[test]
    fn test_render_single_condition_has_no_joiner() {
        let mut ast = select(Projection::Wildcard);
        ast.conditions = vec![Condition::first("name", CompareOp::Eq, "bob")];
        ast.order_by = vec![OrderSpec::new("id", OrderDir::Asc)];
        assert_eq!(
            render(&ast),
            "SELECT * FROM public.users WHERE name = 'bob' ORDER BY id ASC"
        );
    }

    #[test]
    fn test_render_two_conditions_uses_the_second_fragments_tag() {
        let mut ast = select(Projection::Wildcard);
        ast.conditions = vec![
            Condition::first("id", CompareOp::Gt, "5"),
            Condition::joined(LogicalOp::Or, "name", CompareOp::Like, "%a%"),
        ];
        assert_eq!(
            render(&ast),
            "SELECT * FROM public.users WHERE id > '5' OR name LIKE '%a%'"
        );
    }

    #[test]
    fn test_render_mixed_chain_is_not_parenthesized() {
        let mut ast = select(Projection::Wildcard);
        ast.conditions = vec![
            Condition::first("id", CompareOp::Gt, "5"),
            Condition::joined(LogicalOp::Or, "name", CompareOp::Like, "%a%"),
            Condition::joined(LogicalOp::And, "id", CompareOp::Lte, "100"),
        ];
        assert_eq!(
            render(&ast),
            "SELECT * FROM public.users WHERE id > '5' OR name LIKE '%a%' AND id <= '100'"
        );
    }

    #[test]
    fn test_render_multiple_order_specs() {
        let mut ast = select(Projection::Wildcard);
        ast.order_by = vec![
            OrderSpec::new("name", OrderDir::Asc),
            OrderSpec::new("id", OrderDir::Desc),
        ];
        assert_eq!(
            render(&ast),
            "SELECT * FROM public.users ORDER BY name ASC, id DESC"
        );
    }
}
