use super::view_model::PizzaOrderViewModel;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use contracts::domain::a001_pizza_order::{FormField, TOPPINGS};
use contracts::domain::common::AggregateId;
use contracts::enums::PizzaSize;
use leptos::prelude::*;

#[component]
pub fn PizzaOrderDetails() -> impl IntoView {
    let vm = PizzaOrderViewModel::new();

    let size_options: Vec<(&'static str, &'static str)> = PizzaSize::all()
        .into_iter()
        .map(|size| (size.code(), size.display_name()))
        .collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <form class="details-container pizza-order" on:submit=on_submit>
            <h2>"Order Your Pizza"</h2>

            {move || vm.success.get().map(|text| view! { <div class="success">{text}</div> })}
            {move || vm.failure.get().map(|text| view! { <div class="failure">{text}</div> })}

            <Input
                label=FormField::FullName.label()
                name=FormField::FullName.name()
                value=Signal::derive(vm.field_value(FormField::FullName))
                on_input=Callback::new(move |value: String| vm.change_field(FormField::FullName, value))
                error=Signal::derive(vm.field_error(FormField::FullName))
                placeholder="Type full name"
            />

            <Select
                label=FormField::Size.label()
                name=FormField::Size.name()
                value=Signal::derive(vm.field_value(FormField::Size))
                on_change=Callback::new(move |value: String| vm.change_field(FormField::Size, value))
                options=size_options
                placeholder="----Choose Size----"
                error=Signal::derive(vm.field_error(FormField::Size))
            />

            <div class="input-group toppings">
                {TOPPINGS
                    .iter()
                    .map(|topping| {
                        let id = topping.id;
                        view! {
                            <Checkbox
                                label=topping.label
                                name=id.as_string()
                                checked=Signal::derive(vm.is_topping_selected(id))
                                on_change=Callback::new(move |checked: bool| vm.set_topping(id, checked))
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <Button disabled=Signal::derive(move || !vm.enabled.get())>"Submit"</Button>
        </form>
    }
}
