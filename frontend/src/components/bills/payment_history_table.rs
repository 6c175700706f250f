use yew::prelude::*;
use shared::format::{capitalize_first_letter, format_billing_period, format_currency};
use shared::workflow::ResultTable;
use shared::PaymentRecord;

#[derive(Properties, PartialEq)]
pub struct PaymentHistoryTableProps {
    pub table: ResultTable<PaymentRecord>,
}

#[function_component(PaymentHistoryTable)]
pub fn payment_history_table(props: &PaymentHistoryTableProps) -> Html {
    let records = match &props.table {
        ResultTable::NotSearched => {
            return html! { <p class="table-empty">{"Search for a client to see paid bills."}</p> };
        }
        ResultTable::NoneFound => {
            return html! { <p class="table-empty none-found">{"No paid bills found."}</p> };
        }
        ResultTable::Rows(records) => records,
    };

    html! {
        <div class="table-container">
            <table class="bills-table">
                <thead>
                    <tr>
                        <th>{"Client ID"}</th>
                        <th>{"Service Type"}</th>
                        <th>{"Billing Period"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for records.iter().map(|record| html! {
                        <tr>
                            <td>{record.client_id.to_string()}</td>
                            <td>{record.service_type.label()}</td>
                            <td>{format_billing_period(&record.billing_period)}</td>
                            <td class="amount">{format_currency(record.amount)}</td>
                            <td class="status paid">{capitalize_first_letter(&record.status)}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
