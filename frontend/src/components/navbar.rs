use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct NavbarProps {
    pub user_name: AttrValue,
    pub user_role: AttrValue,
    pub on_logout: Callback<MouseEvent>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-content">
                <div class="navbar-brand">
                    <div class="brand-logo">{"GC"}</div>
                    <div class="brand-text">
                        <h1>{"GCDL"}</h1>
                        <p>{"Management System"}</p>
                    </div>
                </div>

                <div class="navbar-user">
                    <div class="user-info">
                        <div class="user-name">{props.user_name.clone()}</div>
                        <div class="user-role">{props.user_role.clone()}</div>
                    </div>
                    <button onclick={props.on_logout.clone()} class="btn-logout">
                        {"Logout"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
