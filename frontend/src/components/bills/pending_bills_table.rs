use yew::prelude::*;
use shared::format::{capitalize_first_letter, format_billing_period, format_currency};
use shared::workflow::ResultTable;
use shared::PendingBill;

#[derive(Properties, PartialEq)]
pub struct PendingBillsTableProps {
    pub table: ResultTable<PendingBill>,
    /// Emits the row index to pay
    pub on_pay: Callback<usize>,
}

#[function_component(PendingBillsTable)]
pub fn pending_bills_table(props: &PendingBillsTableProps) -> Html {
    let rows = match &props.table {
        ResultTable::NotSearched => {
            return html! { <p class="table-empty">{"Search for a client to see pending bills."}</p> };
        }
        ResultTable::NoneFound => {
            return html! { <p class="table-empty none-found">{"No pending bills found."}</p> };
        }
        ResultTable::Rows(rows) => rows,
    };

    html! {
        <div class="table-container">
            <table class="bills-table">
                <thead>
                    <tr>
                        <th>{"Service Type"}</th>
                        <th>{"Billing Period"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().enumerate().map(|(index, bill)| {
                        let on_pay = props.on_pay.clone();
                        let key = format!("{}-{}-{}", bill.client_id, bill.service_type, bill.billing_period);
                        html! {
                            <tr key={key}>
                                <td>{bill.service_type.label()}</td>
                                <td>{format_billing_period(&bill.billing_period)}</td>
                                <td class="amount">{format_currency(bill.amount)}</td>
                                <td>{capitalize_first_letter(&bill.status)}</td>
                                <td class="actions">
                                    <button
                                        class="btn btn-pay"
                                        onclick={Callback::from(move |_: MouseEvent| on_pay.emit(index))}
                                    >
                                        {"Pay Now"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
