/// Static text for every prompt and console message.
///
/// Prompts end with a spaced separator and are printed without a
/// newline; messages are printed as full lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    MenuInit,
    TryAgain,
    TableNotExists,
    DescribeFailure,
    SelectFailure,
    ColumnNotExists,
    NotImplemented,
    ShowTablesHeader,
    DescribeHeader,
    DescribeTableName,
    SelectTableName,
    SelectColumns,
    ConditionColumn,
    ConditionOperator,
    ConditionValue,
    ConditionLogical,
    OrderColumns,
    OrderDirections,
    OrderInvalid,
    PressEnter,
}

impl Label {
    pub fn text(&self) -> &'static str {
        match self {
            Label::MenuInit => concat!(
                "\n[Manipulate data]\n",
                " 1. Show tables\n",
                " 2. Describe table\n",
                " 3. Select\n",
                " 4. Insert\n",
                " 5. Update\n",
                " 6. Delete\n",
                " 7. Drop table\n",
                " 8. Back\n",
                "Choose an operation: "
            ),
            Label::TryAgain => "Try again.",
            Label::TableNotExists => "Table does not exist.",
            Label::DescribeFailure => "Failed to describe the table.",
            Label::SelectFailure => "Failed to run SELECT.",
            Label::ColumnNotExists => "Column does not exist.",
            Label::NotImplemented => "Not implemented yet.",
            Label::ShowTablesHeader => "[Tables]",
            Label::DescribeHeader => "[Columns]",
            Label::DescribeTableName => "Specify the table name: ",
            Label::SelectTableName => "Specify the table name: ",
            Label::SelectColumns => "Columns to select (comma-separated, * for all): ",
            Label::ConditionColumn => "Condition column (empty line to finish): ",
            Label::ConditionOperator => {
                "Operator [1 '=' | 2 '>' | 3 '<' | 4 '>=' | 5 '<=' | 6 '!=' | 7 LIKE]: "
            }
            Label::ConditionValue => "Specify the condition value",
            Label::ConditionLogical => "Next [1 AND | 2 OR | 3 finish]: ",
            Label::OrderColumns => "Order by columns (comma-separated, empty line to skip): ",
            Label::OrderDirections => {
                "Order directions (comma-separated asc/desc, empty line for asc): "
            }
            Label::OrderInvalid => "Invalid order specification.",
            Label::PressEnter => "Press Enter to continue... ",
        }
    }
}
